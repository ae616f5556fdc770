use super::definition::OnboardingRequest;
use crate::error::ProfileConversionError;

/// A trait for custom onboarding payloads that can be converted into an
/// [`OnboardingRequest`].
///
/// Dashboards and form backends rarely agree on field names. Implementing this
/// trait on your own deserialization structs provides the translation layer, so
/// the synthesizer only ever sees its canonical request model.
///
/// # Example
///
/// ```rust,no_run
/// use inboxflow::prelude::*;
/// use inboxflow::error::ProfileConversionError;
///
/// struct SignupForm { account: String, business: String, staff: Vec<String> }
///
/// impl IntoProfile for SignupForm {
///     fn into_request(self) -> std::result::Result<OnboardingRequest, ProfileConversionError> {
///         if self.account.is_empty() {
///             return Err(ProfileConversionError::ValidationError("account is empty".into()));
///         }
///         Ok(OnboardingRequest::new(BusinessProfile::new(self.account, self.business))
///             .with_managers(self.staff))
///     }
/// }
/// ```
pub trait IntoProfile {
    /// Consumes the object and converts it into a synthesizer-ready request.
    fn into_request(self) -> Result<OnboardingRequest, ProfileConversionError>;
}

impl IntoProfile for OnboardingRequest {
    fn into_request(self) -> Result<OnboardingRequest, ProfileConversionError> {
        Ok(self)
    }
}
