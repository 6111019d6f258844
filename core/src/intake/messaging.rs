use crate::error::CoreResult;
use crate::service::InfoGuardService;
use crate::verdict::check::ClaimRequest;
use crate::verdict::language::Language;
use crate::verdict::payload::VerdictRecord;

pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't process that message. Please try again with a different claim.";

const LIKELY_FALSE_LABELS: &[&str] = &["Likely False", "संभवतः गलत", "பொய்யாக இருக்கலாம்"];
const WARNING_EMOJI: &str = "\u{26A0}\u{FE0F}";
const INFO_EMOJI: &str = "\u{2139}\u{FE0F}";

/// Reply language from explicit language mentions in the message body.
pub fn detect_language(body: &str) -> Language {
    let lower = body.to_lowercase();
    if body.contains("हिंदी") || lower.contains("hindi") {
        Language::Hi
    } else if body.contains("தமிழ்") || lower.contains("tamil") {
        Language::Ta
    } else {
        Language::En
    }
}

pub fn format_reply(record: &VerdictRecord, original_text: &str) -> String {
    let emoji = if LIKELY_FALSE_LABELS.contains(&record.verdict.as_str()) {
        WARNING_EMOJI
    } else {
        INFO_EMOJI
    };
    let percent = (record.confidence * 100.0).floor() as i64;

    let mut out = format!("{} {} \u{2014} {}%\n\n", emoji, record.verdict, percent);
    out.push_str(&format!("Claim: \"{}\"\n\n", original_text));
    out.push_str(&format!("Why: {}\n\n", record.explanation));
    out.push_str("Sources:\n");
    for source in &record.sources {
        out.push_str(&format!("- {}: {}\n", source.title, source.url));
    }
    out.push_str("\nActions: [Copy reply] [Save] [Feedback \u{1F44D}/\u{1F44E}]");
    out
}

fn reply_for(service: &InfoGuardService, body: &str) -> CoreResult<String> {
    let language = detect_language(body);
    let req = ClaimRequest::new(body).with_language(language.as_str());
    let record = service.lookup_verdict(&req)?;
    Ok(format_reply(&record, body))
}

/// Reply text for an incoming chat message. Never fails; lookup errors turn
/// into the fixed apology.
pub fn handle_incoming(service: &InfoGuardService, body: &str) -> String {
    let body = body.trim();
    match reply_for(service, body) {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(error = %e, "messaging reply fell back");
            FALLBACK_REPLY.to_string()
        }
    }
}

/// TwiML envelope for a single outbound message.
pub fn to_twiml(message: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        xml_escape(message)
    )
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
