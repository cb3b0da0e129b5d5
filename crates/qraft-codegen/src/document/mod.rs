mod operation;
mod query_document;

pub use operation::Operation;
pub use operation::OperationKind;
pub use query_document::QueryDocument;
