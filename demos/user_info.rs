use anyhow::Result;
use clap::{CommandFactory, Parser};
use gogithub::{Client, Credentials};

// Example program that calls the library API.
// Credentials not given on the command line are looked up in
// GITHUB_USERNAME / GITHUB_PASSWORD or a `.githubrc` file.
#[derive(Parser, Debug)]
#[clap(name = "user_info", about = "Print a GitHub user's profile and your email addresses")]
struct Opt {
    /// GitHub username to authenticate as
    #[clap(long)]
    username: Option<String>,

    /// GitHub password
    #[clap(long)]
    password: Option<String>,

    /// GitHub user to query
    #[clap(long)]
    user: Option<String>,

    #[clap(short = 'l', long = "log", default_value = "warn")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    tracing_subscriber::fmt()
        .with_max_level(opt.log_level)
        .with_writer(std::io::stderr)
        .init();

    let Some(user) = opt.user.filter(|u| !u.is_empty()) else {
        println!("You must specify a GitHub user to query.\n");
        Opt::command().print_help()?;
        return Ok(());
    };

    // Errors are reported, not propagated: the program just stops.
    let client = match Credentials::resolve(opt.username, opt.password)
        .and_then(Credentials::into_session)
        .and_then(Client::new)
    {
        Ok(client) => client,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    match client.get_user(&user) {
        Ok(profile) => println!("{}", profile),
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    }

    match client.get_emails() {
        Ok(emails) => println!("{}", emails),
        Err(e) => println!("{}", e),
    }

    Ok(())
}
