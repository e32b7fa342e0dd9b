use crate::api_models::normalize_callsign;
use crate::error::ErrorMessage;
use axum::{
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
};
use serde::Deserialize;
use shared::opensky::states::BoundingBox;

// Raw query parameters; kept as strings so missing and malformed values get distinct messages
#[derive(Debug, Deserialize)]
struct RawCallsign {
    callsign: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawBoundingBox {
    lamin: Option<String>,
    lomin: Option<String>,
    lamax: Option<String>,
    lomax: Option<String>,
}

/// Normalized (trimmed, upper-cased) `callsign` query parameter. Rejects missing or blank values.
#[derive(Debug, Clone)]
pub struct Callsign(pub String);

impl<S> FromRequestParts<S> for Callsign
where
    S: Send + Sync,
{
    type Rejection = ErrorMessage;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<RawCallsign>::from_request_parts(parts, state)
            .await
            .map_err(|e| ErrorMessage::from((StatusCode::BAD_REQUEST, e.to_string())))?;

        let callsign = params
            .callsign
            .map(|c| normalize_callsign(&c))
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                ErrorMessage::from((
                    StatusCode::BAD_REQUEST,
                    "callsign query parameter is required",
                ))
            })?;

        Ok(Self(callsign))
    }
}

/// Extractor for a bounding box that ensures:
/// 1) all of `lamin`, `lomin`, `lamax`, `lomax` are present and finite numbers
/// 2) latitudes are within [-90, 90] and longitudes within [-180, 180]
/// 3) each minimum is not greater than its maximum
#[derive(Debug, Clone, Copy)]
pub struct ValidatedBoundingBox(pub BoundingBox);

impl<S> FromRequestParts<S> for ValidatedBoundingBox
where
    S: Send + Sync,
{
    type Rejection = ErrorMessage;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<RawBoundingBox>::from_request_parts(parts, state)
            .await
            .map_err(|e| ErrorMessage::from((StatusCode::BAD_REQUEST, e.to_string())))?;

        let bounds = BoundingBox {
            lamin: parse_bound("lamin", params.lamin.as_deref(), 90.0)?,
            lomin: parse_bound("lomin", params.lomin.as_deref(), 180.0)?,
            lamax: parse_bound("lamax", params.lamax.as_deref(), 90.0)?,
            lomax: parse_bound("lomax", params.lomax.as_deref(), 180.0)?,
        };

        if bounds.lamin > bounds.lamax {
            return Err(ErrorMessage::from((
                StatusCode::BAD_REQUEST,
                "lamin must not be greater than lamax",
            )));
        }

        if bounds.lomin > bounds.lomax {
            return Err(ErrorMessage::from((
                StatusCode::BAD_REQUEST,
                "lomin must not be greater than lomax",
            )));
        }

        Ok(Self(bounds))
    }
}

fn parse_bound(name: &str, raw: Option<&str>, limit: f64) -> Result<f64, ErrorMessage> {
    let raw = raw.ok_or_else(|| {
        ErrorMessage::from((
            StatusCode::BAD_REQUEST,
            format!("{name} query parameter is required"),
        ))
    })?;

    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            ErrorMessage::from((
                StatusCode::BAD_REQUEST,
                format!("{name} must be a number, got {raw:?}"),
            ))
        })?;

    if !(-limit..=limit).contains(&value) {
        return Err(ErrorMessage::from((
            StatusCode::BAD_REQUEST,
            format!("{name} must be between -{limit} and {limit}"),
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract<T>(uri: &str) -> Result<T, ErrorMessage>
    where
        T: FromRequestParts<(), Rejection = ErrorMessage>,
    {
        let (mut parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        T::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn callsign_is_normalized() {
        let Callsign(callsign) = extract::<Callsign>("/track?callsign=%20aa123%20").await.unwrap();
        assert_eq!(callsign, "AA123");
    }

    #[tokio::test]
    async fn blank_callsign_is_rejected() {
        for uri in ["/track", "/track?callsign=", "/track?callsign=%20%20"] {
            let err = extract::<Callsign>(uri).await.unwrap_err();
            assert_eq!(err.status_code, StatusCode::BAD_REQUEST, "{uri}");
        }
    }

    #[tokio::test]
    async fn bounding_box_is_parsed() {
        let ValidatedBoundingBox(bounds) =
            extract::<ValidatedBoundingBox>("/region?lamin=45.8&lomin=5.9&lamax=47.8&lomax=10.5")
                .await
                .unwrap();
        assert_eq!(
            bounds,
            BoundingBox {
                lamin: 45.8,
                lomin: 5.9,
                lamax: 47.8,
                lomax: 10.5,
            }
        );
    }

    #[tokio::test]
    async fn missing_bound_is_named() {
        let err = extract::<ValidatedBoundingBox>("/region?lamin=45.8&lomin=5.9&lamax=47.8")
            .await
            .unwrap_err();
        assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "lomax query parameter is required");
    }

    #[tokio::test]
    async fn non_numeric_bounds_are_rejected() {
        for bad in ["abc", "", "NaN", "inf"] {
            let uri = format!("/region?lamin={bad}&lomin=5.9&lamax=47.8&lomax=10.5");
            let err = extract::<ValidatedBoundingBox>(&uri).await.unwrap_err();
            assert_eq!(err.status_code, StatusCode::BAD_REQUEST, "{bad}");
            assert!(err.message.starts_with("lamin must be a number"), "{bad}");
        }
    }

    #[tokio::test]
    async fn out_of_range_and_inverted_bounds_are_rejected() {
        for uri in [
            "/region?lamin=-91&lomin=5.9&lamax=47.8&lomax=10.5",
            "/region?lamin=45.8&lomin=5.9&lamax=47.8&lomax=180.5",
            "/region?lamin=47.8&lomin=5.9&lamax=45.8&lomax=10.5",
            "/region?lamin=45.8&lomin=10.5&lamax=47.8&lomax=5.9",
        ] {
            let err = extract::<ValidatedBoundingBox>(uri).await.unwrap_err();
            assert_eq!(err.status_code, StatusCode::BAD_REQUEST, "{uri}");
        }
    }
}
