//! Description and tag strings written to the catalog.
//!
//! The description is the visible product text followed by a hidden
//! `<div class="oculto">` fragment. The theme reads full-set status and
//! condition from that fragment and renders an "Inquire" button that opens a
//! prefilled WhatsApp chat.

use crate::listing::{Condition, FullSet, ModelTag};

use super::headline::collapse_whitespace;

/// Marker inserted between the visible text and the hidden fragment for
/// listings priced on request.
pub const PRICE_ON_REQUEST_NOTE: &str = "\n\nPrice Under Request\n\n";

/// Joins the non-empty parts with single spaces.
///
/// ```rust
/// use catalogpack::extract::visible_description;
///
/// assert_eq!(
///     visible_description(&["Birkin 30", "Gold  Epsom", "", "Stamp W"]),
///     "Birkin 30 Gold Epsom Stamp W"
/// );
/// ```
pub fn visible_description(parts: &[&str]) -> String {
    let joined = parts
        .iter()
        .filter(|part| !part.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&joined)
}

/// Hidden fragment appended to every description.
pub fn hidden_fragment(
    full_set: FullSet,
    condition: Condition,
    contact_phone: &str,
    business_name: &str,
) -> String {
    let mut html = String::with_capacity(640);
    html.push_str("<div class=\"oculto\">\n\n");
    html.push_str(full_set.label());
    html.push_str("\n\n");
    html.push_str(condition.label());
    html.push_str("\n\n");
    html.push_str(
        "<a href=\"#\" class=\"whatsapp-button\" onclick=\"openWhatsApp()\">Inquire</a>\n",
    );
    html.push_str("<script>\nfunction openWhatsApp() {\n");
    html.push_str(&format!("  var phoneNumber = \"{contact_phone}\";\n"));
    // The script sees `\\n`, which the browser string turns into `\n`
    html.push_str(&format!(
        "  var message = \"Thank you for contacting {business_name}. \\\\nTo assist you personally, \
         please send us this message and we’ll take care of the rest. \" + window.location.href;\n"
    ));
    html.push_str("  var encodedMessage = encodeURIComponent(message);\n");
    html.push_str(
        "  var whatsappURL = \"https://wa.me/\" + phoneNumber + \"?text=\" + encodedMessage;\n",
    );
    html.push_str("  window.open(whatsappURL, \"_blank\");\n");
    html.push_str("}\n</script>\n</div>");
    html
}

/// `Brand New, Birkin`, or just the condition when no model tag was found.
pub fn tags(condition: Condition, model_tag: Option<ModelTag>) -> String {
    match model_tag {
        Some(tag) => format!("{}, {}", condition.label(), tag.label()),
        None => condition.label().to_string(),
    }
}
