//! Client for the senate.gov contact list.
//!
//! The feed is flat: one `<member>` per senator directly under
//! `<contact_information>`, each with `<last_name>`, `<first_name>` and
//! `<party>` children. It has no term history, so it is read with its own
//! extraction code rather than the `@unitedstates` one.

use ao_validators::RawValue;
use roxmltree::{Document, Node};

use crate::error::{ParseError, RosterError};
use crate::http::Fetcher;
use crate::model::RecordError;
use crate::records::Senator;

const ROOT: &str = "contact_information";
const MEMBER: &str = "member";

/// Parse the feed body.
///
/// # Errors
/// Returns an error if the body is not well-formed XML.
pub fn parse_xml(body: &str) -> Result<Document<'_>, ParseError> {
    Ok(Document::parse(body)?)
}

fn child_text(node: Node<'_, '_>, tag: &str) -> Result<RawValue, RecordError> {
    node.children()
        .find(|child| child.has_tag_name(tag))
        .and_then(|child| child.text())
        .map(RawValue::from)
        .ok_or_else(|| RecordError::Missing(format!("{MEMBER}.{tag}")))
}

impl Senator {
    /// Build a senator from one `<member>` element. Only the name and party
    /// are available; every other field is empty.
    ///
    /// # Errors
    /// Returns an error if the node is not a `<member>`, a child is absent,
    /// or a value is invalid.
    pub fn from_xml(node: Node<'_, '_>) -> Result<Self, RecordError> {
        if !node.has_tag_name(MEMBER) {
            return Err(RecordError::Malformed(format!(
                "expected <{MEMBER}>, got <{}>",
                node.tag_name().name()
            )));
        }
        Self::new(
            child_text(node, "last_name")?,
            child_text(node, "first_name")?,
            child_text(node, "party")?,
        )
    }
}

/// Build a senator for every `<member>` in a parsed feed.
///
/// # Errors
/// Returns an error if the root is not `<contact_information>` or a member is invalid.
pub fn senators_from_document(doc: &Document<'_>) -> Result<Vec<Senator>, RosterError> {
    let root = doc.root_element();
    if !root.has_tag_name(ROOT) {
        return Err(ParseError::Shape(format!(
            "expected <{ROOT}>, got <{}>",
            root.tag_name().name()
        ))
        .into());
    }

    root.children()
        .filter(|node| node.has_tag_name(MEMBER))
        .enumerate()
        .map(|(index, node)| Senator::from_xml(node).map_err(|e| RosterError::record(index, e)))
        .collect()
}

/// Every current senator, from the senate.gov feed.
///
/// # Errors
/// Returns an error if the feed cannot be fetched or parsed, or a member is invalid.
pub async fn senators<F>(fetcher: &F, url: &str) -> Result<Vec<Senator>, RosterError>
where
    F: Fetcher + ?Sized,
{
    let body = fetcher.get(url).await?;
    let doc = parse_xml(&body)?;
    let senators = senators_from_document(&doc)?;
    tracing::info!(url, selected = senators.len(), "built records");
    Ok(senators)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_xml(last: &str, first: &str, party: &str) -> String {
        format!(
            "<member><last_name>{last}</last_name><first_name>{first}</first_name>\
             <party>{party}</party></member>"
        )
    }

    #[test]
    fn from_xml_reads_children() {
        let body = member_xml("Spam", "Eggs", "D");
        let doc = parse_xml(&body).unwrap();
        let senator = Senator::from_xml(doc.root_element()).unwrap();
        assert_eq!(senator, Senator::new("Spam", "Eggs", "D").unwrap());
    }

    #[test]
    fn from_xml_requires_each_child() {
        let doc =
            parse_xml("<member><last_name>Spam</last_name><party>D</party></member>").unwrap();
        assert_eq!(
            Senator::from_xml(doc.root_element()).unwrap_err(),
            RecordError::Missing("member.first_name".into())
        );

        let xml =
            "<member><last_name>Spam</last_name><first_name>Eggs</first_name><party/></member>";
        let doc = parse_xml(xml).unwrap();
        assert_eq!(
            Senator::from_xml(doc.root_element()).unwrap_err(),
            RecordError::Missing("member.party".into())
        );
    }

    #[test]
    fn from_xml_rejects_other_elements() {
        let doc = parse_xml("<senator/>").unwrap();
        assert!(matches!(
            Senator::from_xml(doc.root_element()),
            Err(RecordError::Malformed(_))
        ));
    }

    #[test]
    fn from_xml_validates_party() {
        let body = member_xml("Spam", "Eggs", "Whig");
        let doc = parse_xml(&body).unwrap();
        let err = Senator::from_xml(doc.root_element()).unwrap_err();
        assert_eq!(err.field(), Some("party"));
    }

    #[test]
    fn document_skips_non_member_siblings() {
        let body = format!(
            "<contact_information>{}{}\
             <last_updated>Wednesday, June 5, 2019: 9:28 AM EST</last_updated>\
             </contact_information>",
            member_xml("Sanders", "Bernard", "I"),
            member_xml("Durbin", "Dick", "D"),
        );
        let doc = parse_xml(&body).unwrap();
        let senators = senators_from_document(&doc).unwrap();
        assert_eq!(
            senators,
            vec![
                Senator::new("Sanders", "Bernard", "I").unwrap(),
                Senator::new("Durbin", "Dick", "D").unwrap(),
            ]
        );
    }

    #[test]
    fn document_requires_contact_information_root() {
        let doc = parse_xml("<roster/>").unwrap();
        assert!(matches!(
            senators_from_document(&doc),
            Err(RosterError::Parse(ParseError::Shape(_)))
        ));
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        assert!(matches!(parse_xml("<member>"), Err(ParseError::Xml(_))));
    }
}
