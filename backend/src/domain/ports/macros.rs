//! `define_port_error!` generates a `thiserror` enum plus one snake_case
//! constructor per variant, each accepting `impl Into<T>` for its fields.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum SamplePortError {
            Unreachable { message: String } => "unreachable: {message}",
            Missing { restaurant_id: i32 } => "missing restaurant {restaurant_id}",
            Stale { message: String, attempts: u32 } => "stale: {message} after {attempts}",
            Closed => "closed",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::unreachable("db down");
        assert_eq!(err.to_string(), "unreachable: db down");
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        let err = SamplePortError::missing(7);
        assert_eq!(err, SamplePortError::Missing { restaurant_id: 7 });
        assert_eq!(err.to_string(), "missing restaurant 7");
    }

    #[test]
    fn mixed_and_unit_variants_get_constructors() {
        assert_eq!(
            SamplePortError::stale("cache", 3_u32).to_string(),
            "stale: cache after 3"
        );
        assert_eq!(SamplePortError::closed().to_string(), "closed");
    }
}
