use potluck_application::SplitRequestError;
use potluck_domain::SplitError;
use serde::Serialize;

/// `{"error": "..."}` body returned for failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub fn format_split_request_error(error: &SplitRequestError) -> String {
    match error {
        SplitRequestError::MissingEventId => potluck_i18n::EVENT_ID_REQUIRED.to_string(),
        SplitRequestError::EventNotFound(event_id) => potluck_i18n::event_not_found(event_id),
        SplitRequestError::EventSource(source) => source.message.clone(),
        SplitRequestError::Split(SplitError::EmptyParticipantSet) => {
            potluck_i18n::NO_PARTICIPANTS_FOUND.to_string()
        }
        SplitRequestError::Split(SplitError::AmountOverflow(stage)) => {
            potluck_i18n::amount_overflow(stage)
        }
        SplitRequestError::Split(SplitError::UnsupportedScale {
            scale,
            max_supported,
        }) => potluck_i18n::unsupported_currency_scale(*scale, *max_supported),
    }
}
