use jsonschema::JSONSchema;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;

fn compile(raw: &'static str) -> JSONSchema {
    let schema: Value = serde_json::from_str(raw).expect("embedded schema is valid JSON");
    let schema: &'static Value = Box::leak(Box::new(schema));
    JSONSchema::options()
        .compile(schema)
        .expect("embedded schema compiles")
}

static CLASSIC: Lazy<JSONSchema> =
    Lazy::new(|| compile(include_str!("../../schemas/entry.classic.v1.json")));
static PORTABLE: Lazy<JSONSchema> =
    Lazy::new(|| compile(include_str!("../../schemas/entry.portable.v1.json")));
static CONSOLE: Lazy<JSONSchema> =
    Lazy::new(|| compile(include_str!("../../schemas/entry.console.v1.json")));
static COMMAND: Lazy<JSONSchema> =
    Lazy::new(|| compile(include_str!("../../schemas/entry.command.v1.json")));

/// Which stat fields an edition's files carry, as one schema per family.
///
/// A record either has exactly its family's fields or it is rejected at
/// load time; there is no per-file optionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditionFamily {
    /// Core eight stats only.
    Classic,
    /// Core plus movement and build in the base stats.
    Portable,
    /// Core plus movement and weight in the base stats; entries may carry
    /// an elemental affinity.
    Console,
    /// Core plus movement, build, and authority in the base stats;
    /// movement and build also appear in the growth rates.
    Command,
}

impl EditionFamily {
    fn schema(&self) -> &'static JSONSchema {
        match self {
            EditionFamily::Classic => &CLASSIC,
            EditionFamily::Portable => &PORTABLE,
            EditionFamily::Console => &CONSOLE,
            EditionFamily::Command => &COMMAND,
        }
    }

    /// Validate a raw record wholesale against this family's schema.
    ///
    /// Returns every violation so a load warning can name the exact fields.
    pub fn validate(&self, record: &Value) -> std::result::Result<(), Vec<String>> {
        if let Err(errors) = self.schema().validate(record) {
            let messages: Vec<String> = errors
                .map(|e| {
                    if e.instance_path.to_string().is_empty() {
                        e.to_string()
                    } else {
                        format!("{} (at {})", e, e.instance_path)
                    }
                })
                .collect();
            return Err(messages);
        }
        Ok(())
    }
}
