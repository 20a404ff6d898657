pub(crate) mod catalog;
pub(crate) mod invoke;
pub(crate) mod scan;
pub(crate) mod serve;
