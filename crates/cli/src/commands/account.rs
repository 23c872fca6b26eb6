//! Account commands: register, login, logout, whoami

use quickcart_core::{AccountDirectory, Credentials, NewAccount, Store};

pub fn register(
    store: &Store,
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let directory = AccountDirectory::new(store);
    let profile = directory.register(NewAccount {
        username,
        email,
        password,
        confirm_password,
    })?;

    println!("Account created for {} <{}>.", profile.username, profile.email);
    println!("Log in with --remember to stay signed in between commands.");
    Ok(())
}

pub fn login(
    store: &Store,
    identifier: &str,
    password: &str,
    remember: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directory = AccountDirectory::new(store);
    let profile = directory.login(Credentials {
        email_or_username: identifier,
        password,
        remember,
    })?;

    if remember {
        println!("Welcome back, {}! Session will be remembered.", profile.username);
    } else {
        println!(
            "Welcome back, {}! Session lasts for this invocation only.",
            profile.username
        );
    }
    Ok(())
}

pub fn logout(store: &Store) -> Result<(), Box<dyn std::error::Error>> {
    let directory = AccountDirectory::new(store);
    directory.logout()?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(store: &Store) {
    let directory = AccountDirectory::new(store);
    match directory.current_session() {
        Some(profile) => println!(
            "{} <{}> (member since {})",
            profile.username,
            profile.email,
            profile.created_at.format("%Y-%m-%d")
        ),
        None => println!("Not logged in."),
    }
}
