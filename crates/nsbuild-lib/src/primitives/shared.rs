/// Implement `FromStr` for a `ValueEnum` through its possible values
///
/// Names and aliases match case-insensitively, so `INFO` from the
/// environment parses the same as `--log-level info`. The error lists the
/// primary names.
macro_rules! impl_fromstr_for_value_enum {
    ($enum_type:ty, $what:literal) => {
        impl FromStr for $enum_type {
            type Err = $crate::primitives::ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let variants = <Self as ValueEnum>::value_variants();

                variants
                    .iter()
                    .find(|variant| {
                        variant
                            .to_possible_value()
                            .is_some_and(|value| value.matches(s, true))
                    })
                    .copied()
                    .ok_or_else(|| {
                        let expected: Vec<String> = variants
                            .iter()
                            .filter_map(|variant| variant.to_possible_value())
                            .map(|value| value.get_name().to_string())
                            .collect();
                        $crate::primitives::ConfigError::ParseError {
                            value: s.to_string(),
                            reason: format!(
                                "invalid {}, expected one of {}",
                                $what,
                                expected.join(", ")
                            ),
                        }
                    })
            }
        }
    };
}

pub(crate) use impl_fromstr_for_value_enum;
