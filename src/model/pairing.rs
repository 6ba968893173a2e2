use mason_framework::{display_value, Document};
use serde_json::Value;
use tracing::warn;

/// One ingredient of a recipe, as listed by the recipe's ingredient document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub ingredient: String,
    pub amount: String,
    pub unit: String,
}

/// Reads the `ingredients` map of a pairing document.
///
/// Entries are `name: [amount, unit]`. The reversed order `[unit, amount]`
/// is recognised by the element types: whichever element is a number is the
/// amount. Map order is kept.
pub fn pairings(doc: &Document) -> Vec<Pairing> {
    let Some(Value::Object(map)) = doc.field("ingredients") else {
        return Vec::new();
    };

    map.iter()
        .map(|(ingredient, entry)| {
            let (amount, unit) = match entry {
                Value::Array(parts) => split(parts),
                other => {
                    warn!(%ingredient, entry = %other, "Pairing entry is not a tuple");
                    (display_value(other), String::new())
                }
            };
            Pairing {
                ingredient: ingredient.clone(),
                amount,
                unit,
            }
        })
        .collect()
}

fn split(parts: &[Value]) -> (String, String) {
    let first = parts.first().unwrap_or(&Value::Null);
    let second = parts.get(1).unwrap_or(&Value::Null);
    if !first.is_number() && second.is_number() {
        (display_value(second), display_value(first))
    } else {
        (display_value(first), display_value(second))
    }
}
