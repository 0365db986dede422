//! Step definitions and scenarios for `tests/features/data_unit.feature`.

mod test_helpers;
