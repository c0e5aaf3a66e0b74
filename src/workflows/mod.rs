pub mod design;
pub mod launch;
