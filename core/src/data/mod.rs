pub mod spec_doc;
