use serde::{Deserialize, Deserializer, Serialize};

/// A single order ("pedido"). The id is supplied by the caller and is not
/// checked for uniqueness.
///
/// Missing or `null` fields decode to their zero value, only a wrong JSON type
/// is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Order {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(rename = "descripcion", deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "valor", deserialize_with = "null_as_default")]
    pub value: f64,
    #[serde(rename = "estado", deserialize_with = "null_as_default")]
    pub status: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
