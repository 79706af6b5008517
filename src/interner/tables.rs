use super::table::LiteralTable;

/// The four literal pools owned by one tokenizer.
///
/// The `get_*` accessors take the `id` of a token as produced by the
/// tokenizer. They panic on ids that did not come from a token of the matching
/// kind.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralTables {
    pub integers: LiteralTable<i64>,
    pub floats: LiteralTable<f64>,
    pub identifiers: LiteralTable<String>,
    pub strings: LiteralTable<String>,
}

impl Default for LiteralTables {
    fn default() -> Self {
        LiteralTables {
            integers: LiteralTable::named("integer"),
            floats: LiteralTable::named("float"),
            identifiers: LiteralTable::named("identifier"),
            strings: LiteralTable::named("string"),
        }
    }
}

impl LiteralTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_identifier(&self, id: i32) -> &str {
        self.identifiers.get(to_index(id))
    }

    pub fn get_integer(&self, id: i32) -> i64 {
        *self.integers.get(to_index(id))
    }

    pub fn get_float(&self, id: i32) -> f64 {
        *self.floats.get(to_index(id))
    }

    pub fn get_string(&self, id: i32) -> &str {
        self.strings.get(to_index(id))
    }
}

fn to_index(id: i32) -> usize {
    // negative ids map to 0, which no table hands out
    usize::try_from(id).unwrap_or(0)
}
