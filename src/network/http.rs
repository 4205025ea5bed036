use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};

use crate::common::{ActionReply, ActivityCatalog, Enrollment, ErrorReply};
use crate::error::ApiError;

use super::ActivityApi;

/// `ActivityApi` over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpActivityApi {
    client: Client,
    base_url: Url,
}

impl HttpActivityApi {
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        if base_url.cannot_be_a_base() {
            return Err(ApiError::BaseUrl(base_url.to_string()));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `.` and `..` would be swallowed by path normalisation and hit another route.
    fn enrollment_url(&self, enrollment: &Enrollment, action: &str) -> Result<Url, ApiError> {
        if matches!(enrollment.activity.as_str(), "." | "..") {
            return Err(ApiError::PathSegment(enrollment.activity.clone()));
        }

        let mut url = self.endpoint(&["activities", &enrollment.activity, action])?;
        url.query_pairs_mut().append_pair("email", &enrollment.email);
        Ok(url)
    }

    async fn send_enrollment(
        &self,
        method: Method,
        enrollment: &Enrollment,
        action: &str,
    ) -> Result<ActionReply, ApiError> {
        let url = self.enrollment_url(enrollment, action)?;
        log::debug!("{method} {url}");

        let response = self.client.request(method, url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        interpret_reply(status, &body)
    }
}

#[async_trait]
impl ActivityApi for HttpActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let url = self.endpoint(&["activities"])?;
        log::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Unavailable {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn signup(&self, enrollment: &Enrollment) -> Result<ActionReply, ApiError> {
        self.send_enrollment(Method::POST, enrollment, "signup").await
    }

    async fn unregister(&self, enrollment: &Enrollment) -> Result<ActionReply, ApiError> {
        self.send_enrollment(Method::DELETE, enrollment, "unregister")
            .await
    }
}

/// Maps a signup/unregister response onto a reply or a server error.
///
/// An error body that is not JSON, or whose `detail` is not a string, yields a
/// server error without detail.
fn interpret_reply(status: StatusCode, body: &[u8]) -> Result<ActionReply, ApiError> {
    if status.is_success() {
        return Ok(serde_json::from_slice(body)?);
    }

    let detail = serde_json::from_slice::<ErrorReply>(body)
        .ok()
        .and_then(ErrorReply::into_detail);

    Err(ApiError::Server {
        status: status.as_u16(),
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn api(base: &str) -> HttpActivityApi {
        HttpActivityApi::new(Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn list_endpoint_joins_base_path() {
        assert_eq!(
            api("http://127.0.0.1:8000/").endpoint(&["activities"]).unwrap().as_str(),
            "http://127.0.0.1:8000/activities"
        );
        assert_eq!(
            api("http://school.test/api").endpoint(&["activities"]).unwrap().as_str(),
            "http://school.test/api/activities"
        );
    }

    #[test]
    fn enrollment_url_percent_encodes_name_and_email() {
        let url = api("http://127.0.0.1:8000/")
            .enrollment_url(&Enrollment::new("Chess Club", "a+b@mergington.edu"), "signup")
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/activities/Chess%20Club/signup?email=a%2Bb%40mergington.edu"
        );
    }

    #[test]
    fn slash_in_activity_name_stays_one_segment() {
        let url = api("http://127.0.0.1:8000/")
            .enrollment_url(&Enrollment::new("Art/Design", "x@y.edu"), "unregister")
            .unwrap();

        assert_eq!(url.path(), "/activities/Art%2FDesign/unregister");
    }

    #[test]
    fn dot_activity_names_are_rejected() {
        let api = api("http://127.0.0.1:8000/");

        for name in [".", ".."] {
            let err = api
                .enrollment_url(&Enrollment::new(name, "x@y.edu"), "signup")
                .unwrap_err();
            assert!(matches!(err, ApiError::PathSegment(ref segment) if segment == name));
        }

        let url = api
            .enrollment_url(&Enrollment::new("...", "x@y.edu"), "signup")
            .unwrap();
        assert_eq!(url.path(), "/activities/.../signup");
    }

    #[test]
    fn base_url_must_carry_a_path() {
        let err = HttpActivityApi::new(Url::parse("mailto:office@mergington.edu").unwrap())
            .unwrap_err();

        assert!(matches!(err, ApiError::BaseUrl(_)));
    }

    #[test]
    fn success_reply_is_decoded() {
        let reply = interpret_reply(
            StatusCode::OK,
            br#"{"message": "Signed up x@y.edu for Chess Club"}"#,
        )
        .unwrap();

        assert_eq!(reply.message, "Signed up x@y.edu for Chess Club");
    }

    #[test]
    fn error_reply_carries_detail() {
        let err = interpret_reply(
            StatusCode::BAD_REQUEST,
            br#"{"detail": "Student already signed up for this activity"}"#,
        )
        .unwrap_err();

        match err {
            ApiError::Server { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(
                    detail.as_deref(),
                    Some("Student already signed up for this activity")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_error_reply_has_no_detail() {
        let err = interpret_reply(StatusCode::BAD_GATEWAY, b"<html>Bad Gateway</html>").unwrap_err();

        assert!(matches!(
            err,
            ApiError::Server {
                status: 502,
                detail: None
            }
        ));
    }

    #[test]
    fn non_json_success_reply_is_a_decode_error() {
        let err = interpret_reply(StatusCode::OK, b"ok").unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }
}
