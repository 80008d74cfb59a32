use bytemuck::NoUninit;
use strum_macros::{Display, EnumString};

/// The number of chain buffers preallocated by default. One is used by the cycle being recorded,
/// the rest hold cycles waiting for their deferred publication.
pub const DEFAULT_CHAIN_POOL_SIZE: usize = 4;
/// The default room in one chain. A cycle produces at most one record per phase.
pub const DEFAULT_MAX_RECORDS_PER_CYCLE: usize = 8;

/// What the hook does with each GC event.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, NoUninit, EnumString, Display)]
pub enum ObserverMode {
    /// Record one snapshot per phase and deliver them to the subscriber after each cycle.
    #[strum(to_string = "full_snapshot", serialize = "full", serialize = "FullSnapshot")]
    FullSnapshot,
    /// Only accumulate GC time and count. Requires GC enter/exit events from the runtime.
    #[strum(
        to_string = "light_counters",
        serialize = "light",
        serialize = "LightCounters"
    )]
    LightCounters,
}

fn always_valid<T>(_: &T) -> bool {
    true
}

macro_rules! options {
    ($($(#[$outer:meta])*$name:ident: $type:ty[$validator:expr] = $default:expr),*,) => [
        options!($($(#[$outer])*$name: $type[$validator] = $default),*);
    ];
    ($($(#[$outer:meta])*$name:ident: $type:ty[$validator:expr] = $default:expr),*) => [
        /// Observer options. Each option can be set by name with [`Options::set_from_str`],
        /// or through an environment variable with the `GC_OBSERVER_` prefix
        /// (e.g. `GC_OBSERVER_MAX_RECORDS_PER_CYCLE=16`).
        #[derive(Clone, Debug)]
        pub struct Options {
            $($(#[$outer])*pub $name: $type),*
        }
        impl Options {
            /// Set an option from its name and a string value. Return false, keeping the old value,
            /// if the name is unknown, or the value cannot be parsed or is invalid.
            pub fn set_from_str(&mut self, s: &str, val: &str) -> bool {
                match s {
                    // Parse the given value from str (by env vars or by calling set_option()) to the right type
                    $(stringify!($name) => if let Ok(ref val) = val.parse::<$type>() {
                        // Validate
                        let validate_fn = $validator;
                        let is_valid = validate_fn(val);
                        if is_valid {
                            // Only set value if valid.
                            self.$name = val.clone();
                        } else {
                            warn!("Unable to set {}={:?}. Invalid value. Default value will be used.", s, val);
                        }
                        is_valid
                    } else {
                        warn!("Unable to set {}={:?}. Can't parse value. Default value will be used.", s, val);
                        false
                    })*
                    _ => {
                        warn!("Unknown option {}={:?}.", s, val);
                        false
                    }
                }
            }

            /// Options with their default values, ignoring environment variables.
            pub fn without_env_vars() -> Self {
                Options {
                    $($name: $default),*
                }
            }

            /// Apply every environment variable that starts with `GC_OBSERVER_` and names an option.
            pub fn read_env_var_settings(&mut self) {
                const PREFIX: &str = "GC_OBSERVER_";
                for (key, val) in std::env::vars() {
                    // strip the prefix, and get the lower case string
                    if let Some(rest_of_key) = key.strip_prefix(PREFIX) {
                        let lowercase: &str = &rest_of_key.to_lowercase();
                        match lowercase {
                            $(stringify!($name) => { self.set_from_str(lowercase, &val); },)*
                            _ => {}
                        }
                    }
                }
            }
        }
        impl Default for Options {
            /// Default values, overridden by `GC_OBSERVER_` environment variables.
            fn default() -> Self {
                let mut options = Self::without_env_vars();
                options.read_env_var_settings();
                options
            }
        }
    ]
}

options! {
    /// The mode used by `install_observer_from_options`.
    mode:                  ObserverMode [always_valid] = ObserverMode::FullSnapshot,
    /// The number of preallocated chain buffers.
    chain_pool_size:       usize        [|v: &usize| *v > 0] = DEFAULT_CHAIN_POOL_SIZE,
    /// The maximum number of records in one cycle. A cycle with more events disables the observer.
    max_records_per_cycle: usize        [|v: &usize| *v > 0] = DEFAULT_MAX_RECORDS_PER_CYCLE,
    /// Should each record carry a sample of the runtime's own GC counters?
    capture_runtime_stats: bool         [always_valid] = true,
}
