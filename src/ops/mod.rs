pub mod compare;
pub mod document_ops;
pub mod sort_ops;
pub mod transform;
