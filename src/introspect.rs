/*!
# Sea-ORM Introspection

Builds a [`Schema`] from a Sea-ORM entity by walking its columns and reading
each column definition. Nullable columns are optional, everything else is
required; database enums keep their variants as allowable values.
*/

use sea_orm::{
    ColumnTrait, ColumnType, EntityTrait, IdenStatic, Iterable, PrimaryKeyToColumn,
    entity::ColumnDef, sea_query::Iden,
};

use crate::schema::{FieldType, Schema, SchemaPath};

impl Schema {
    /// Introspect every column of `E`, in declaration order
    #[must_use]
    pub fn from_entity<E: EntityTrait>() -> Self {
        E::Column::iter()
            .map(|column| column_path(column.as_str(), &column.def()))
            .collect()
    }
}

/// Name of the first primary-key column of `E`
#[must_use]
pub fn primary_key_field<E: EntityTrait>() -> Option<String> {
    E::PrimaryKey::iter()
        .next()
        .map(|key| key.into_column().as_str().to_string())
}

fn column_path(name: &str, def: &ColumnDef) -> SchemaPath {
    let mut path = match def.get_column_type() {
        ColumnType::Enum { variants, .. } => SchemaPath::new(name, FieldType::String)
            .enum_values(variants.iter().map(|variant| Iden::to_string(&**variant))),
        ColumnType::Array(inner) => SchemaPath::array_of(name, field_type_of(inner)),
        other => SchemaPath::new(name, field_type_of(other)),
    };
    path.required = !def.is_null();
    path
}

/// Map a column type onto the schema type it is documented as
#[must_use]
pub fn field_type_of(column_type: &ColumnType) -> FieldType {
    match column_type {
        ColumnType::Char(_)
        | ColumnType::String(_)
        | ColumnType::Text
        | ColumnType::Interval(_, _)
        | ColumnType::Cidr
        | ColumnType::Inet
        | ColumnType::MacAddr
        | ColumnType::Enum { .. } => FieldType::String,
        ColumnType::TinyInteger
        | ColumnType::SmallInteger
        | ColumnType::Integer
        | ColumnType::BigInteger
        | ColumnType::TinyUnsigned
        | ColumnType::SmallUnsigned
        | ColumnType::Unsigned
        | ColumnType::BigUnsigned
        | ColumnType::Float
        | ColumnType::Double
        | ColumnType::Decimal(_)
        | ColumnType::Money(_)
        | ColumnType::Year => FieldType::Number,
        ColumnType::DateTime
        | ColumnType::Timestamp
        | ColumnType::TimestampWithTimeZone
        | ColumnType::Date
        | ColumnType::Time => FieldType::Date,
        ColumnType::Boolean => FieldType::Boolean,
        ColumnType::Uuid => FieldType::ObjectId,
        ColumnType::Json | ColumnType::JsonBinary => FieldType::Mixed,
        ColumnType::Binary(_)
        | ColumnType::VarBinary(_)
        | ColumnType::Blob
        | ColumnType::Bit(_)
        | ColumnType::VarBit(_) => FieldType::Buffer,
        ColumnType::Array(_) => FieldType::Array,
        ColumnType::Custom(name) => FieldType::Other(Iden::to_string(&**name)),
        other => FieldType::Other(format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::StringLen;

    #[test]
    fn test_text_and_numeric_columns() {
        assert_eq!(field_type_of(&ColumnType::String(StringLen::None)), FieldType::String);
        assert_eq!(field_type_of(&ColumnType::Text), FieldType::String);
        assert_eq!(field_type_of(&ColumnType::Integer), FieldType::Number);
        assert_eq!(field_type_of(&ColumnType::Double), FieldType::Number);
        assert_eq!(field_type_of(&ColumnType::Decimal(None)), FieldType::Number);
    }

    #[test]
    fn test_temporal_identity_and_binary_columns() {
        assert_eq!(field_type_of(&ColumnType::TimestampWithTimeZone), FieldType::Date);
        assert_eq!(field_type_of(&ColumnType::Uuid), FieldType::ObjectId);
        assert_eq!(field_type_of(&ColumnType::JsonBinary), FieldType::Mixed);
        assert_eq!(field_type_of(&ColumnType::Blob), FieldType::Buffer);
        assert_eq!(field_type_of(&ColumnType::Boolean), FieldType::Boolean);
    }

    #[test]
    fn test_time_of_day_is_a_date_but_interval_is_text() {
        assert_eq!(field_type_of(&ColumnType::Time), FieldType::Date);
        assert_eq!(field_type_of(&ColumnType::Date), FieldType::Date);
        assert_eq!(field_type_of(&ColumnType::Interval(None, None)), FieldType::String);
    }
}
