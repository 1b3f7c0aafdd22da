//! Covenant demo walkthrough
//!
//! Bootstraps the governance stack and drives one full cycle through
//! it: a mint + token-sale proposal, voting, the timelock wait, a
//! purchase, and a payroll run.

use clap::Parser;
use covenant_core::{tokens, Action, Address, TOKEN_UNIT};
use covenant_protocol::bootstrap;
use governance::config;
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "covenant")]
#[command(about = "Covenant governance stack walkthrough")]
struct Cli {
    /// Unix timestamp the scenario clock starts at
    #[arg(long, default_value_t = 1_700_000_000)]
    genesis: u64,

    /// Dump the full event journal as JSON at the end
    #[arg(long)]
    events: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> covenant_protocol::Result<()> {
    let founder = Address::from("founder");
    let holders = [
        (founder.clone(), tokens(1000)),
        (Address::from("addr1"), tokens(1000)),
        (Address::from("addr2"), tokens(1000)),
    ];

    banner("bootstrap");
    let (mut protocol, mut now) = bootstrap(&founder, &holders, cli.genesis)?;
    println!(
        "  timelock admin: {}",
        protocol.timelock().admin().green()
    );
    println!(
        "  token controller: {}",
        protocol.token().controller().green()
    );

    banner("proposal");
    let sale_address = protocol.addresses().token_sale.clone();
    let governance_address = protocol.addresses().governance.clone();
    protocol.approve(&founder, &governance_address, config::PROPOSAL_COST);
    let id = protocol.create_proposal(
        &founder,
        vec![
            Action::Mint {
                amount: tokens(1_000_000_000),
            },
            Action::TreasuryTransfer {
                to: sale_address,
                amount: tokens(10_000_000),
            },
            Action::StartSale {
                tokens: tokens(10_000_000),
                price_per_token: TOKEN_UNIT / 2,
            },
        ],
        now,
    )?;
    println!("  proposal {} created at {}", id.yellow(), timestamp(now));

    protocol.vote(&founder, id, true, now)?;
    protocol.vote(&Address::from("addr1"), id, true, now)?;
    protocol.vote(&Address::from("addr2"), id, false, now)?;
    let proposal = protocol.governor().proposal(id)?;
    println!(
        "  votes: {} for / {} against",
        whole(proposal.votes_for).green(),
        whole(proposal.votes_against).red()
    );

    banner("queue + execute");
    now += config::VOTING_PERIOD + 1;
    let eta = protocol.queue_proposal(id, now)?;
    println!("  queued, executable at {}", timestamp(eta));

    now = eta;
    protocol.execute_proposal(id, now)?;
    println!(
        "  executed; treasury holds {} tokens",
        whole(protocol.balance_of(&protocol.addresses().treasury.clone())).green()
    );

    banner("token sale");
    let buyer = Address::from("buyer");
    protocol.buy_tokens(&buyer, 1, 1000, 500 * TOKEN_UNIT, now)?;
    println!(
        "  {} bought {} tokens; treasury native balance {}",
        buyer,
        whole(protocol.balance_of(&buyer)).green(),
        whole(protocol.treasury().native_balance()).green()
    );

    banner("payroll");
    let payroll_address = protocol.addresses().payroll.clone();
    protocol.approve(&founder, &payroll_address, tokens(10));
    let company = protocol.create_company(
        &founder,
        "Covenant Solutions".to_string(),
        "Software development".to_string(),
        "https://covenant.example".to_string(),
        vec!["CEO".to_string(), "CTO".to_string()],
        "Ada".to_string(),
        "CEO".to_string(),
        now,
    )?;
    protocol.hire_employee(
        &founder,
        company,
        Address::from("alice"),
        "Alice".to_string(),
        "Developer".to_string(),
        tokens(1),
        "USD".to_string(),
        now,
    )?;

    now += 10;
    protocol.pay_employees(&founder, company, now)?;
    println!(
        "  alice earned {} tokens over 10 seconds",
        whole(protocol.balance_of(&Address::from("alice"))).green()
    );

    banner("journal");
    println!("  {} events recorded", protocol.events().len().yellow());
    if cli.events {
        for event in protocol.events() {
            println!(
                "  {}",
                serde_json::to_string(event).unwrap_or_else(|_| "<unserializable>".into())
            );
        }
    }

    Ok(())
}

fn banner(title: &str) {
    println!("\n{}", format!("== {} ==", title).cyan().bold());
}

fn timestamp(ts: u64) -> String {
    chrono::DateTime::from_timestamp(ts as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// Whole tokens, dropping the 18 decimal places.
fn whole(base_units: u128) -> u128 {
    base_units / TOKEN_UNIT
}
