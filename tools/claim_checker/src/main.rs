use infoguard_core::intake::messaging::handle_incoming;
use infoguard_core::service::{InfoGuardService, ServiceConfig};
use infoguard_core::verdict::ClaimRequest;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str =
    "usage: claim_checker <check|retrieve|demo|whatsapp> <claim text | category> [language]";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("serialization error: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }
    let command = args[1].as_str();
    let subject = args[2].as_str();
    let language = args.get(3).map(String::as_str).unwrap_or("en");

    let cfg = ServiceConfig::from_env();
    let service = match InfoGuardService::load(&cfg) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to load data from {}: {}", cfg.data_dir.display(), e);
            std::process::exit(1);
        }
    };
    tracing::debug!(
        data_dir = %cfg.data_dir.display(),
        cached_claims = service.claims_index().len(),
        command,
        "service ready"
    );

    match command {
        "check" => {
            let req = ClaimRequest::new(subject).with_language(language);
            match service.check_claim(&req) {
                Ok(record) => print_json(&record),
                Err(e) => {
                    eprintln!("check failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        "retrieve" => print_json(&service.retrieve(subject)),
        "demo" => match service.get_demo(subject, language) {
            Ok(record) => print_json(&record),
            Err(e) => {
                eprintln!("demo lookup failed: {}", e);
                std::process::exit(1);
            }
        },
        "whatsapp" => println!("{}", handle_incoming(&service, subject)),
        other => {
            eprintln!("invalid command: {}", other);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }
}
