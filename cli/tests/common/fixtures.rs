//! Builders for upstream feed payloads.

use serde_json::{json, Value};

/// A `@unitedstates` entry with a single term.
pub fn us_details(last: &str, first: &str, party: &str, kind: &str, state: &str) -> Value {
    json!({
        "name": {
            "last": last,
            "first": first,
            "full name": format!("{last} {first}"),
        },
        "terms": [{"party": party, "type": kind, "state": state}],
    })
}

/// A House entry: the base entry plus district and contact details.
pub fn rep_details(
    base: (&str, &str, &str, &str),
    district: u8,
    url: &str,
    phone: &str,
) -> Value {
    let (last, first, party, state) = base;
    let mut details = us_details(last, first, party, "rep", state);
    let term = &mut details["terms"][0];
    term["district"] = json!(district);
    term["url"] = json!(url);
    term["phone"] = json!(phone);
    details
}

/// A Senate entry: the base entry plus rank, class and contact details.
pub fn senator_details(
    base: (&str, &str, &str, &str),
    rank: &str,
    class: u8,
    url: &str,
    phone: &str,
) -> Value {
    let (last, first, party, state) = base;
    let mut details = us_details(last, first, party, "sen", state);
    let term = &mut details["terms"][0];
    term["state_rank"] = json!(rank);
    term["class"] = json!(class);
    term["url"] = json!(url);
    term["phone"] = json!(phone);
    details
}

/// A senate.gov contact list with a trailing `<last_updated>` element.
pub fn senate_xml(senators: &[(&str, &str, &str)]) -> String {
    let mut xml =
        String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<contact_information>\n");
    for (last, first, party) in senators {
        xml.push_str(&format!(
            concat!(
                "  <member>\n",
                "    <last_name>{last}</last_name>\n",
                "    <first_name>{first}</first_name>\n",
                "    <party>{party}</party>\n",
                "  </member>\n",
            ),
            last = last,
            first = first,
            party = party,
        ));
    }
    xml.push_str("  <last_updated>Wednesday, June 5, 2019: 9:28 AM EST</last_updated>\n");
    xml.push_str("</contact_information>\n");
    xml
}
