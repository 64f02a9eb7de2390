use anyhow::{Context, Result};
use panos_xmlapi::XmlApiClient;
use panvpn_bulk::push::push_graph;
use panvpn_bulk::report::render_push_report;

use crate::build_from_file;
use crate::cli::PushArgs;

pub fn run_push(args: PushArgs) -> Result<()> {
    let graph = build_from_file(&args.file, !args.quiet)?;

    let password = match args.password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ").context("failed to read password")?,
    };

    let mut session = XmlApiClient::connect(&args.device, &args.username, &password, args.insecure)
        .with_context(|| format!("failed to open API session on {}", args.device))?;

    let report = push_graph(&mut session, &graph)?;
    println!("{}", render_push_report(&report));
    println!("VPN configuration pushed to {}", args.device);
    Ok(())
}
