// Declared by hand to match the climate dataset; the service never migrates it.

diesel::table! {
    station (id) {
        id -> Integer,
        #[sql_name = "station"]
        code -> Text,
        name -> Text,
        latitude -> Double,
        longitude -> Double,
        elevation -> Double,
    }
}

diesel::table! {
    measurement (id) {
        id -> Integer,
        station -> Text,
        date -> Text,
        prcp -> Nullable<Double>,
        tobs -> Double,
    }
}

diesel::allow_tables_to_appear_in_same_query!(station, measurement);
