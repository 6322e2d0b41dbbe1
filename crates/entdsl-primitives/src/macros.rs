#[macro_export]
macro_rules! neutral_type_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (String, "string", family = Textual),
            (Integer, "integer", family = Numeric),
            (Decimal, "decimal", family = Numeric),
            (Boolean, "boolean", family = Bool),
            (Date, "date", family = Temporal),
            (Time, "time", family = Temporal),
            (Timestamp, "timestamp", family = Temporal),
            (Blob, "blob", family = Binary),
            (Clob, "clob", family = Textual),
        }
    };
}

#[macro_export]
macro_rules! neutral_type_registry {
    ($macro:ident) => {
        $crate::neutral_type_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::neutral_type_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! name_from_registry {
    ( @args $kind:expr; @entries $( ($ty:ident, $name:literal, family = $family:ident) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::NeutralType::$ty => $name,
            )*
        }
    };
}

macro_rules! family_from_registry {
    ( @args $kind:expr; @entries $( ($ty:ident, $name:literal, family = $family:ident) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::NeutralType::$ty => $crate::NeutralTypeFamily::$family,
            )*
        }
    };
}

macro_rules! lookup_from_registry {
    ( @args $name:expr; @entries $( ($ty:ident, $lit:literal, family = $family:ident) ),* $(,)? ) => {
        match $name {
            $(
                $lit => Some($crate::NeutralType::$ty),
            )*
            _ => None,
        }
    };
}

macro_rules! all_types_from_registry {
    ( @entries $( ($ty:ident, $name:literal, family = $family:ident) ),* $(,)? ) => {
        [ $( $crate::NeutralType::$ty ),* ]
    };
}
