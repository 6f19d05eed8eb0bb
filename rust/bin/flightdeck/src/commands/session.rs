//! Login / logout / whoami.

use anyhow::Result;

use crate::app::App;

pub async fn login(app: &App, username: &str, password: &str) -> Result<()> {
    let envelope = app.session.login(username, password).await?;
    let identity = &envelope.data.identity;
    println!("Logged in as {} ({}).", identity.username, identity.role);
    Ok(())
}

pub fn logout(app: &App) {
    app.session.terminate();
    println!("Logged out.");
}

pub fn whoami(app: &App) {
    match app.session.identity() {
        Some(identity) => {
            println!("{} <{}>", identity.name, identity.email);
            println!("username: {}", identity.username);
            println!("role:     {}", identity.role);
        }
        None => println!("Not logged in."),
    }
}
