///////////////////////////////////////////////////////////////////////
// Addresses
///////////////////////////////////////////////////////////////////////

table! {
    addresses (id) {
        id -> Text,
        name -> Text,
        building -> Text,
        area -> Text,
        city -> Text,
        postal_code -> Text,
        country -> Text,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}
