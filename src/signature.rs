//! Typed method signature declarations
//!
//! A signature declaration binds, at construction time, a method name, a
//! fixed arity (0 through 9 positional parameter slots), and a
//! parameter-structures policy. It also encodes -- for the type checker only
//! -- the logical parameter types, the success-result type, and the
//! domain-error-data type of the method. None of those types ever appear on
//! the wire; they ride along as phantom markers so call sites are verified
//! statically.
//!
//! Declarations are immutable values: a signature is created once by the
//! code declaring an RPC method and then read concurrently by every call
//! site and dispatcher. The phantom markers use the `fn(..) -> ..` form so
//! they never constrain `Send`/`Sync` and never require the marker types to
//! be constructible.
//!
//! Request variants carry a result type `R` and an error-data type `E`;
//! notification variants carry neither, since notifications have no
//! response. For arities 0 and 1 (and the general [`RequestType`] /
//! [`NotificationType`] forms) the parameter-structures policy is
//! configurable at construction and defaults to `auto`; for arities 2-9 it
//! is fixed to `auto`, because byName encoding is undefined above one
//! parameter and there is no ambiguity left to resolve.
//!
//! # Examples
//!
//! ```rust
//! use jsonrpc_wire::{MessageSignature, RequestType2};
//! use serde_json::json;
//!
//! let add: RequestType2<i64, i64, i64, ()> = RequestType2::new("math/add").unwrap();
//! assert_eq!(add.method(), "math/add");
//! assert_eq!(add.number_of_params(), 2);
//!
//! let params = add.resolve_params(vec![json!(5), json!(3)]).unwrap();
//! assert_eq!(serde_json::to_value(params).unwrap(), json!([5, 3]));
//! ```

use crate::error::{Error, Result};
use crate::structures::ParameterStructures;
use crate::types::Params;
use serde_json::Value;
use std::marker::PhantomData;

/// Capability exposed by every signature declaration
///
/// Anything exposing a method name, a fixed parameter count, and a
/// parameter-structures policy. Realized by the twenty arity variants below.
pub trait MessageSignature {
    /// The declared method name.
    fn method(&self) -> &str;

    /// The declared number of positional parameter slots.
    fn number_of_params(&self) -> usize;

    /// The policy mapping call arguments onto the wire `params` slot.
    fn parameter_structures(&self) -> ParameterStructures;

    /// Collapse a call's arguments into the wire `params` value using this
    /// signature's policy.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameterStructure`] when the argument count does not
    /// match the declared arity, or when the policy itself rejects the
    /// arguments (byName misuse). Both indicate a bug at the call site.
    fn resolve_params(&self, args: Vec<Value>) -> Result<Option<Params>> {
        if args.len() != self.number_of_params() {
            return Err(Error::InvalidParameterStructure(format!(
                "method {:?} declares {} parameters, got {}",
                self.method(),
                self.number_of_params(),
                args.len()
            )));
        }
        self.parameter_structures().resolve(args)
    }
}

/// Shared record embedded in every arity variant
///
/// Holds the method/arity/policy triple so the variants stay thin wrappers.
/// Its constructor is the single place the method name is validated; a
/// declaration never escapes construction with an empty name.
#[derive(Debug, Clone)]
struct SignatureInfo {
    method: String,
    number_of_params: usize,
    structures: ParameterStructures,
}

impl SignatureInfo {
    fn new(
        method: impl Into<String>,
        number_of_params: usize,
        structures: ParameterStructures,
    ) -> Result<Self> {
        let method = method.into();
        if method.is_empty() {
            return Err(Error::InvalidMethodName(method));
        }
        Ok(Self {
            method,
            number_of_params,
            structures,
        })
    }
}

/// General request signature with one logical parameter slot
///
/// `P` is the logical parameter type, `R` the success-result type, `E` the
/// domain-specific error-data type. All three are phantom: carried for the
/// type checker, never inspected or constructed here.
#[derive(Debug, Clone)]
pub struct RequestType<P, R, E> {
    info: SignatureInfo,
    _marker: PhantomData<fn(P) -> (R, E)>,
}

impl<P, R, E> RequestType<P, R, E> {
    /// Declare a request method with the default `auto` policy.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMethodName`] if `method` is empty; the only
    /// runtime-checked precondition.
    pub fn new(method: impl Into<String>) -> Result<Self> {
        Self::with_parameter_structures(method, ParameterStructures::Auto)
    }

    /// Declare a request method with an explicit policy.
    pub fn with_parameter_structures(
        method: impl Into<String>,
        structures: ParameterStructures,
    ) -> Result<Self> {
        Ok(Self {
            info: SignatureInfo::new(method, 1, structures)?,
            _marker: PhantomData,
        })
    }
}

impl<P, R, E> MessageSignature for RequestType<P, R, E> {
    fn method(&self) -> &str {
        &self.info.method
    }

    fn number_of_params(&self) -> usize {
        self.info.number_of_params
    }

    fn parameter_structures(&self) -> ParameterStructures {
        self.info.structures
    }
}

/// Request signature with no parameters
#[derive(Debug, Clone)]
pub struct RequestType0<R, E> {
    info: SignatureInfo,
    _marker: PhantomData<fn() -> (R, E)>,
}

impl<R, E> RequestType0<R, E> {
    /// Declare a zero-parameter request method with the default `auto`
    /// policy (which omits `params` entirely).
    pub fn new(method: impl Into<String>) -> Result<Self> {
        Self::with_parameter_structures(method, ParameterStructures::Auto)
    }

    /// Declare a zero-parameter request method with an explicit policy.
    pub fn with_parameter_structures(
        method: impl Into<String>,
        structures: ParameterStructures,
    ) -> Result<Self> {
        Ok(Self {
            info: SignatureInfo::new(method, 0, structures)?,
            _marker: PhantomData,
        })
    }
}

impl<R, E> MessageSignature for RequestType0<R, E> {
    fn method(&self) -> &str {
        &self.info.method
    }

    fn number_of_params(&self) -> usize {
        self.info.number_of_params
    }

    fn parameter_structures(&self) -> ParameterStructures {
        self.info.structures
    }
}

/// Request signature with one parameter
///
/// The arity where structure ambiguity actually exists: a single object
/// argument can travel by name or wrapped in a one-element sequence, so the
/// policy is configurable here.
#[derive(Debug, Clone)]
pub struct RequestType1<P1, R, E> {
    info: SignatureInfo,
    _marker: PhantomData<fn(P1) -> (R, E)>,
}

impl<P1, R, E> RequestType1<P1, R, E> {
    /// Declare a one-parameter request method with the default `auto` policy.
    pub fn new(method: impl Into<String>) -> Result<Self> {
        Self::with_parameter_structures(method, ParameterStructures::Auto)
    }

    /// Declare a one-parameter request method with an explicit policy.
    pub fn with_parameter_structures(
        method: impl Into<String>,
        structures: ParameterStructures,
    ) -> Result<Self> {
        Ok(Self {
            info: SignatureInfo::new(method, 1, structures)?,
            _marker: PhantomData,
        })
    }
}

impl<P1, R, E> MessageSignature for RequestType1<P1, R, E> {
    fn method(&self) -> &str {
        &self.info.method
    }

    fn number_of_params(&self) -> usize {
        self.info.number_of_params
    }

    fn parameter_structures(&self) -> ParameterStructures {
        self.info.structures
    }
}

// With two or more parameters there is nothing to configure: byName is
// undefined above arity 1, leaving auto (== byPosition) as the only
// meaningful behavior. The remaining request variants are mechanical, so a
// macro stamps them out.
macro_rules! request_type {
    ($(#[$doc:meta])* $name:ident, $arity:expr, $($p:ident),+) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name<$($p,)+ R, E> {
            info: SignatureInfo,
            _marker: PhantomData<fn($($p),+) -> (R, E)>,
        }

        impl<$($p,)+ R, E> $name<$($p,)+ R, E> {
            /// Declare a request method; the policy is fixed to `auto`.
            ///
            /// # Errors
            ///
            /// [`Error::InvalidMethodName`] if `method` is empty.
            pub fn new(method: impl Into<String>) -> Result<Self> {
                Ok(Self {
                    info: SignatureInfo::new(method, $arity, ParameterStructures::Auto)?,
                    _marker: PhantomData,
                })
            }
        }

        impl<$($p,)+ R, E> MessageSignature for $name<$($p,)+ R, E> {
            fn method(&self) -> &str {
                &self.info.method
            }

            fn number_of_params(&self) -> usize {
                self.info.number_of_params
            }

            fn parameter_structures(&self) -> ParameterStructures {
                self.info.structures
            }
        }
    };
}

request_type!(
    /// Request signature with two parameters
    RequestType2, 2, P1, P2
);
request_type!(
    /// Request signature with three parameters
    RequestType3, 3, P1, P2, P3
);
request_type!(
    /// Request signature with four parameters
    RequestType4, 4, P1, P2, P3, P4
);
request_type!(
    /// Request signature with five parameters
    RequestType5, 5, P1, P2, P3, P4, P5
);
request_type!(
    /// Request signature with six parameters
    RequestType6, 6, P1, P2, P3, P4, P5, P6
);
request_type!(
    /// Request signature with seven parameters
    RequestType7, 7, P1, P2, P3, P4, P5, P6, P7
);
request_type!(
    /// Request signature with eight parameters
    RequestType8, 8, P1, P2, P3, P4, P5, P6, P7, P8
);
request_type!(
    /// Request signature with nine parameters
    RequestType9, 9, P1, P2, P3, P4, P5, P6, P7, P8, P9
);

/// General notification signature with one logical parameter slot
///
/// Notifications have no response, so there is no result or error-data
/// marker to carry.
#[derive(Debug, Clone)]
pub struct NotificationType<P> {
    info: SignatureInfo,
    _marker: PhantomData<fn(P)>,
}

impl<P> NotificationType<P> {
    /// Declare a notification method with the default `auto` policy.
    pub fn new(method: impl Into<String>) -> Result<Self> {
        Self::with_parameter_structures(method, ParameterStructures::Auto)
    }

    /// Declare a notification method with an explicit policy.
    pub fn with_parameter_structures(
        method: impl Into<String>,
        structures: ParameterStructures,
    ) -> Result<Self> {
        Ok(Self {
            info: SignatureInfo::new(method, 1, structures)?,
            _marker: PhantomData,
        })
    }
}

impl<P> MessageSignature for NotificationType<P> {
    fn method(&self) -> &str {
        &self.info.method
    }

    fn number_of_params(&self) -> usize {
        self.info.number_of_params
    }

    fn parameter_structures(&self) -> ParameterStructures {
        self.info.structures
    }
}

/// Notification signature with no parameters
#[derive(Debug, Clone)]
pub struct NotificationType0 {
    info: SignatureInfo,
}

impl NotificationType0 {
    /// Declare a zero-parameter notification with the default `auto` policy.
    pub fn new(method: impl Into<String>) -> Result<Self> {
        Self::with_parameter_structures(method, ParameterStructures::Auto)
    }

    /// Declare a zero-parameter notification with an explicit policy.
    pub fn with_parameter_structures(
        method: impl Into<String>,
        structures: ParameterStructures,
    ) -> Result<Self> {
        Ok(Self {
            info: SignatureInfo::new(method, 0, structures)?,
        })
    }
}

impl MessageSignature for NotificationType0 {
    fn method(&self) -> &str {
        &self.info.method
    }

    fn number_of_params(&self) -> usize {
        self.info.number_of_params
    }

    fn parameter_structures(&self) -> ParameterStructures {
        self.info.structures
    }
}

/// Notification signature with one parameter
#[derive(Debug, Clone)]
pub struct NotificationType1<P1> {
    info: SignatureInfo,
    _marker: PhantomData<fn(P1)>,
}

impl<P1> NotificationType1<P1> {
    /// Declare a one-parameter notification with the default `auto` policy.
    pub fn new(method: impl Into<String>) -> Result<Self> {
        Self::with_parameter_structures(method, ParameterStructures::Auto)
    }

    /// Declare a one-parameter notification with an explicit policy.
    pub fn with_parameter_structures(
        method: impl Into<String>,
        structures: ParameterStructures,
    ) -> Result<Self> {
        Ok(Self {
            info: SignatureInfo::new(method, 1, structures)?,
            _marker: PhantomData,
        })
    }
}

impl<P1> MessageSignature for NotificationType1<P1> {
    fn method(&self) -> &str {
        &self.info.method
    }

    fn number_of_params(&self) -> usize {
        self.info.number_of_params
    }

    fn parameter_structures(&self) -> ParameterStructures {
        self.info.structures
    }
}

macro_rules! notification_type {
    ($(#[$doc:meta])* $name:ident, $arity:expr, $($p:ident),+) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name<$($p),+> {
            info: SignatureInfo,
            _marker: PhantomData<fn($($p),+)>,
        }

        impl<$($p),+> $name<$($p),+> {
            /// Declare a notification method; the policy is fixed to `auto`.
            ///
            /// # Errors
            ///
            /// [`Error::InvalidMethodName`] if `method` is empty.
            pub fn new(method: impl Into<String>) -> Result<Self> {
                Ok(Self {
                    info: SignatureInfo::new(method, $arity, ParameterStructures::Auto)?,
                    _marker: PhantomData,
                })
            }
        }

        impl<$($p),+> MessageSignature for $name<$($p),+> {
            fn method(&self) -> &str {
                &self.info.method
            }

            fn number_of_params(&self) -> usize {
                self.info.number_of_params
            }

            fn parameter_structures(&self) -> ParameterStructures {
                self.info.structures
            }
        }
    };
}

notification_type!(
    /// Notification signature with two parameters
    NotificationType2, 2, P1, P2
);
notification_type!(
    /// Notification signature with three parameters
    NotificationType3, 3, P1, P2, P3
);
notification_type!(
    /// Notification signature with four parameters
    NotificationType4, 4, P1, P2, P3, P4
);
notification_type!(
    /// Notification signature with five parameters
    NotificationType5, 5, P1, P2, P3, P4, P5
);
notification_type!(
    /// Notification signature with six parameters
    NotificationType6, 6, P1, P2, P3, P4, P5, P6
);
notification_type!(
    /// Notification signature with seven parameters
    NotificationType7, 7, P1, P2, P3, P4, P5, P6, P7
);
notification_type!(
    /// Notification signature with eight parameters
    NotificationType8, 8, P1, P2, P3, P4, P5, P6, P7, P8
);
notification_type!(
    /// Notification signature with nine parameters
    NotificationType9, 9, P1, P2, P3, P4, P5, P6, P7, P8, P9
);
