pub mod hist;
pub mod policy;
pub mod record;
pub mod selection;
pub mod tissue;
pub mod versions;
