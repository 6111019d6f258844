use infoguard_core::claim::{classify, normalize, Category};
use infoguard_core::evidence::score;
use infoguard_core::intake::messaging::handle_incoming;
use infoguard_core::service::config::{CLAIMS_INDEX_FILE, DEMO_PAYLOAD_FILE};
use infoguard_core::service::{InfoGuardService, ServiceConfig};
use infoguard_core::verdict::ClaimRequest;
use tracing_subscriber::{fmt, EnvFilter};

const SAMPLE_DEMO_PAYLOAD: &str = include_str!("../../../sample_data/preloaded_demo.json");
const SAMPLE_CLAIMS_INDEX: &str = include_str!("../../../sample_data/claims_index.json");

struct Check {
    id: &'static str,
    passed: bool,
    message: String,
}

impl Check {
    fn new(id: &'static str, passed: bool, message: impl Into<String>) -> Self {
        Self {
            id,
            passed,
            message: message.into(),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // Loads the bundled sample data from a scratch directory, runs the fixed
    // self-check suite and exits non-zero on any failure.
    init_tracing();

    let tmp = tempfile::tempdir().expect("tempdir");
    std::fs::write(tmp.path().join(DEMO_PAYLOAD_FILE), SAMPLE_DEMO_PAYLOAD)
        .expect("write demo payload");
    std::fs::write(tmp.path().join(CLAIMS_INDEX_FILE), SAMPLE_CLAIMS_INDEX)
        .expect("write claims index");

    let service =
        InfoGuardService::load(&ServiceConfig::with_data_dir(tmp.path())).expect("load service");
    tracing::info!(
        categories = service.payload().categories().len(),
        cached_claims = service.claims_index().len(),
        "sample data loaded"
    );

    let checks = run_checks(&service);
    let mut any_fail = false;
    for c in &checks {
        println!(
            "CHECK {} {} {}",
            c.id,
            if c.passed { "PASS" } else { "FAIL" },
            c.message
        );
        any_fail |= !c.passed;
    }
    if any_fail {
        std::process::exit(1);
    }
}

fn run_checks(service: &InfoGuardService) -> Vec<Check> {
    let mut checks = Vec::new();

    let raw = "  COVID Is Fake!!\n\n";
    let once = normalize(raw);
    checks.push(Check::new(
        "NORMALIZE_IDEMPOTENT",
        normalize(&once) == once && once == "covid is fake!!",
        format!("normalized={:?}", once),
    ));

    checks.push(Check::new(
        "SCORE_EMPTY_NEUTRAL",
        score(&[]) == 0.5,
        format!("score={}", score(&[])),
    ));

    let unmatched = classify(&normalize("The earth is flat"));
    checks.push(Check::new(
        "CLASSIFY_DEFAULT_FALSE",
        unmatched == Category::False,
        format!("category={}", unmatched),
    ));

    let r = service.retrieve("Herbal tea cures COVID, WHO confirms");
    let has_links = r.sources.iter().any(|s| s.title == "WHO Search")
        && r.sources.iter().any(|s| s.title == "Reuters Fact Check Search");
    checks.push(Check::new(
        "RETRIEVE_HERBAL_TEA",
        has_links && r.category == Category::False && (0.0..=1.0).contains(&r.confidence),
        format!(
            "sources={} confidence={:.3} cache_id={}",
            r.sources.len(),
            r.confidence,
            r.cache_id.as_deref().unwrap_or("-")
        ),
    ));

    let empty = service.retrieve("");
    checks.push(Check::new(
        "RETRIEVE_EMPTY_NO_CACHE",
        empty.cache_id.is_none() && empty.category == Category::False,
        format!("confidence={:.3}", empty.confidence),
    ));

    match service.check_claim(&ClaimRequest::new("Vitamin C prevents COVID").with_language("ta"))
    {
        Ok(rec) => checks.push(Check::new(
            "CHECK_CLAIM_LANGUAGE_FALLBACK",
            rec.id == "demo_partly_true_en" && (rec.confidence - 0.68).abs() < 1e-9,
            format!("id={} confidence={:.3}", rec.id, rec.confidence),
        )),
        Err(e) => checks.push(Check::new("CHECK_CLAIM_LANGUAGE_FALLBACK", false, e.to_string())),
    }

    checks.push(Check::new(
        "DEMO_UNKNOWN_CATEGORY_NOT_FOUND",
        service.get_demo("needs_review", "en").is_err(),
        "needs_review",
    ));

    let reply = handle_incoming(service, "Vaccine has a microchip, hindi please");
    checks.push(Check::new(
        "MESSAGING_REPLY",
        reply.contains("Sources:") && reply.contains("Claim: \""),
        format!("first_line={:?}", reply.lines().next().unwrap_or("")),
    ));

    match serde_json::to_string(&r) {
        Ok(json) => checks.push(Check::new(
            "RETRIEVAL_SERIALIZES",
            json.contains("\"category\":\"false\""),
            format!("bytes={}", json.len()),
        )),
        Err(e) => checks.push(Check::new("RETRIEVAL_SERIALIZES", false, e.to_string())),
    }

    checks
}
