use serde::Serialize;

use crate::coerce;
use crate::store::Document;

/// Field names in the FAQs collection.
pub mod fields {
    pub const QUESTION: &str = "question";
    pub const ANSWER: &str = "answer";
}

#[derive(Debug, Clone, Serialize)]
pub struct Faq {
    pub id: String,
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl Faq {
    pub fn from_document(id: String, doc: &Document) -> Self {
        Self {
            id,
            question: coerce::str_field(doc, fields::QUESTION),
            answer: coerce::str_field(doc, fields::ANSWER),
        }
    }
}
