pub(crate) mod modal;
pub(crate) mod spinner;
pub(crate) mod text;
pub(crate) mod trip_table;
