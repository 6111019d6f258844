use infoguard_core::evidence::live_links::deep_links;
use infoguard_core::evidence::{ClaimsIndex, EvidenceRetriever, ReliabilityTable};
use std::fs;
use std::path::{Path, PathBuf};

// Search endpoints are only ever formatted into strings, never requested.
const SEARCH_HOSTS: [&str; 2] = ["www.who.int/search", "www.reuters.com/site-search"];

fn core_sources() -> Vec<(PathBuf, String)> {
    fn collect(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
        for ent in fs::read_dir(dir).unwrap() {
            let p = ent.unwrap().path();
            if p.is_dir() {
                collect(&p, out);
            } else if p.extension().and_then(|x| x.to_str()) == Some("rs") {
                let text = fs::read_to_string(&p).unwrap();
                out.push((p, text));
            }
        }
    }
    let mut out = Vec::new();
    collect(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut out);
    out
}

#[test]
fn no_http_client_or_socket_in_core() {
    let sources = core_sources();
    assert!(sources.len() > 10);

    let forbidden = [
        "reqwest",
        "ureq::",
        "surf::",
        "hyper::",
        "isahc::",
        "std::net::",
        "TcpStream",
        "tokio::net",
    ];
    for (path, text) in &sources {
        for tok in forbidden {
            assert!(
                !text.contains(tok),
                "network token '{}' in {}",
                tok,
                path.display()
            );
        }
    }
}

#[test]
fn search_endpoints_live_only_in_link_builder() {
    for (path, text) in core_sources() {
        let is_builder = path.ends_with("evidence/live_links.rs");
        for host in SEARCH_HOSTS {
            assert_eq!(
                text.contains(host),
                is_builder,
                "search endpoint '{}' placement in {}",
                host,
                path.display()
            );
        }
    }
}

#[test]
fn deep_links_reach_callers_without_fetched_content() {
    let links = deep_links("Herbal tea cures COVID");
    assert_eq!(links.len(), 2);
    for (link, host) in links.iter().zip(SEARCH_HOSTS) {
        assert!(link.url.starts_with(&format!("https://{host}")));
        assert!(link.excerpt.is_none());
    }

    // Without a cache hit, retrieval is exactly the two unfetched links.
    let index = ClaimsIndex::new(Vec::new());
    let retriever = EvidenceRetriever::new(&index, ReliabilityTable::builtin());
    let r = retriever.retrieve("Herbal tea cures COVID");
    assert_eq!(r.sources, links);
    assert!(r.sources.iter().all(|s| !s.has_excerpt()));
}
