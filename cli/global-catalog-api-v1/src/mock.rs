pub mod operations {
    //! [`When`](httpmock::When) and [`Then`](httpmock::Then)
    //! wrappers for each operation. Each can be converted to
    //! its inner type with a call to `into_inner()`. This can
    //! be used to explicitly deviate from permitted values.
    use crate::*;
    pub struct ListCatalogEntriesWhen(httpmock::When);
    impl ListCatalogEntriesWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::GET)
                    .path_matches(regex::Regex::new("^/$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn include<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("include", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "include") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn q<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("q", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "q") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn sort_by<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("sort-by", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "sort-by") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn descending<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("descending", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "descending") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn languages<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("languages", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "languages") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn catalog<T>(self, value: T) -> Self
        where
            T: Into<Option<bool>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("catalog", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "catalog") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn complete<T>(self, value: T) -> Self
        where
            T: Into<Option<bool>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("complete", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "complete") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn offset<T>(self, value: T) -> Self
        where
            T: Into<Option<i64>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("_offset", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "_offset") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn limit<T>(self, value: T) -> Self
        where
            T: Into<Option<i64>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("_limit", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "_limit") })
                                .is_none()
                        }),
                )
            }
        }
    }
    pub struct ListCatalogEntriesThen(httpmock::Then);
    impl ListCatalogEntriesThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self, value: &types::EntrySearchResult) -> Self {
            Self(
                self
                    .0
                    .status(200u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn bad_request(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(400u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct CreateCatalogEntryWhen(httpmock::When);
    impl CreateCatalogEntryWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::POST)
                    .path_matches(regex::Regex::new("^/$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn body(self, value: &types::CatalogEntryPrototype) -> Self {
            Self(self.0.json_body_obj(value))
        }
    }
    pub struct CreateCatalogEntryThen(httpmock::Then);
    impl CreateCatalogEntryThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn created(self, value: &types::CatalogEntry) -> Self {
            Self(
                self
                    .0
                    .status(201u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn bad_request(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(400u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn conflict(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(409u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct GetCatalogEntryWhen(httpmock::When);
    impl GetCatalogEntryWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::GET)
                    .path_matches(regex::Regex::new("^/[^/?#]+$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn include<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("include", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "include") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn languages<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("languages", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "languages") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn complete<T>(self, value: T) -> Self
        where
            T: Into<Option<bool>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("complete", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "complete") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn depth<T>(self, value: T) -> Self
        where
            T: Into<Option<i64>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("depth", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "depth") })
                                .is_none()
                        }),
                )
            }
        }
    }
    pub struct GetCatalogEntryThen(httpmock::Then);
    impl GetCatalogEntryThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self, value: &types::CatalogEntry) -> Self {
            Self(
                self
                    .0
                    .status(200u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn bad_request(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(400u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct UpdateCatalogEntryWhen(httpmock::When);
    impl UpdateCatalogEntryWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::PUT)
                    .path_matches(regex::Regex::new("^/[^/?#]+$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn move_<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("move", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "move") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn body(self, value: &types::CatalogEntryPrototype) -> Self {
            Self(self.0.json_body_obj(value))
        }
    }
    pub struct UpdateCatalogEntryThen(httpmock::Then);
    impl UpdateCatalogEntryThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self, value: &types::CatalogEntry) -> Self {
            Self(
                self
                    .0
                    .status(200u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn bad_request(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(400u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn conflict(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(409u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct DeleteCatalogEntryWhen(httpmock::When);
    impl DeleteCatalogEntryWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::DELETE)
                    .path_matches(regex::Regex::new("^/[^/?#]+$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn force<T>(self, value: T) -> Self
        where
            T: Into<Option<bool>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("force", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "force") })
                                .is_none()
                        }),
                )
            }
        }
    }
    pub struct DeleteCatalogEntryThen(httpmock::Then);
    impl DeleteCatalogEntryThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self) -> Self {
            Self(self.0.status(200u16))
        }
        pub fn bad_request(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(400u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct GetChildObjectsWhen(httpmock::When);
    impl GetChildObjectsWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::GET)
                    .path_matches(regex::Regex::new("^/[^/?#]+/[^/?#]+$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}/[^/?#]+$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn kind(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/[^/?#]+/{}$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn include<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("include", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "include") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn q<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("q", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "q") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn sort_by<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("sort-by", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "sort-by") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn descending<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("descending", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "descending") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn languages<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("languages", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "languages") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn complete<T>(self, value: T) -> Self
        where
            T: Into<Option<bool>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("complete", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "complete") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn offset<T>(self, value: T) -> Self
        where
            T: Into<Option<i64>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("_offset", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "_offset") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn limit<T>(self, value: T) -> Self
        where
            T: Into<Option<i64>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("_limit", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "_limit") })
                                .is_none()
                        }),
                )
            }
        }
    }
    pub struct GetChildObjectsThen(httpmock::Then);
    impl GetChildObjectsThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self, value: &types::EntrySearchResult) -> Self {
            Self(
                self
                    .0
                    .status(200u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn bad_request(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(400u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct RestoreCatalogEntryWhen(httpmock::When);
    impl RestoreCatalogEntryWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::PUT)
                    .path_matches(regex::Regex::new("^/[^/?#]+/restore$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}/restore$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
    }
    pub struct RestoreCatalogEntryThen(httpmock::Then);
    impl RestoreCatalogEntryThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self) -> Self {
            Self(self.0.status(200u16))
        }
        pub fn no_content(self) -> Self {
            Self(self.0.status(204u16))
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct GetVisibilityWhen(httpmock::When);
    impl GetVisibilityWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::GET)
                    .path_matches(regex::Regex::new("^/[^/?#]+/visibility$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}/visibility$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
    }
    pub struct GetVisibilityThen(httpmock::Then);
    impl GetVisibilityThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self, value: &types::Visibility) -> Self {
            Self(
                self
                    .0
                    .status(200u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn bad_request(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(400u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct UpdateVisibilityWhen(httpmock::When);
    impl UpdateVisibilityWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::PUT)
                    .path_matches(regex::Regex::new("^/[^/?#]+/visibility$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}/visibility$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn body(self, value: &types::VisibilityUpdate) -> Self {
            Self(self.0.json_body_obj(value))
        }
    }
    pub struct UpdateVisibilityThen(httpmock::Then);
    impl UpdateVisibilityThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self) -> Self {
            Self(self.0.status(200u16))
        }
        pub fn bad_request(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(400u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct GetPricingWhen(httpmock::When);
    impl GetPricingWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::GET)
                    .path_matches(regex::Regex::new("^/[^/?#]+/pricing$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}/pricing$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn deployment_id<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("deployment_id", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "deployment_id") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn deployment_region<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("deployment_region", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "deployment_region") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn deployment_location<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("deployment_location", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "deployment_location") })
                                .is_none()
                        }),
                )
            }
        }
    }
    pub struct GetPricingThen(httpmock::Then);
    impl GetPricingThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self, value: &types::PricingGet) -> Self {
            Self(
                self
                    .0
                    .status(200u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn bad_request(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(400u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct GetPricingDeploymentsWhen(httpmock::When);
    impl GetPricingDeploymentsWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::GET)
                    .path_matches(regex::Regex::new("^/[^/?#]+/pricing/deployment$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}/pricing/deployment$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
    }
    pub struct GetPricingDeploymentsThen(httpmock::Then);
    impl GetPricingDeploymentsThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self, value: &types::PricingSearchResult) -> Self {
            Self(
                self
                    .0
                    .status(200u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn bad_request(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(400u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct GetAuditLogsWhen(httpmock::When);
    impl GetAuditLogsWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::GET)
                    .path_matches(regex::Regex::new("^/[^/?#]+/logs$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}/logs$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn ascending<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("ascending", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "ascending") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn startat<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("startat", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "startat") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn offset<T>(self, value: T) -> Self
        where
            T: Into<Option<i64>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("_offset", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "_offset") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn limit<T>(self, value: T) -> Self
        where
            T: Into<Option<i64>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("_limit", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "_limit") })
                                .is_none()
                        }),
                )
            }
        }
    }
    pub struct GetAuditLogsThen(httpmock::Then);
    impl GetAuditLogsThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self, value: &types::AuditSearchResult) -> Self {
            Self(
                self
                    .0
                    .status(200u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn bad_request(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(400u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct ListArtifactsWhen(httpmock::When);
    impl ListArtifactsWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::GET)
                    .path_matches(regex::Regex::new("^/[^/?#]+/artifacts$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn object_id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}/artifacts$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
    }
    pub struct ListArtifactsThen(httpmock::Then);
    impl ListArtifactsThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self, value: &types::Artifacts) -> Self {
            Self(
                self
                    .0
                    .status(200u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct GetArtifactWhen(httpmock::When);
    impl GetArtifactWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::GET)
                    .path_matches(regex::Regex::new("^/[^/?#]+/artifacts/[^/?#]+$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn object_id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}/artifacts/[^/?#]+$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn artifact_id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/[^/?#]+/artifacts/{}$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
    }
    pub struct GetArtifactThen(httpmock::Then);
    impl GetArtifactThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self, content_type: &str, value: &[u8]) -> Self {
            Self(
                self
                    .0
                    .status(200u16)
                    .header("content-type", content_type)
                    .body(value),
            )
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct UploadArtifactWhen(httpmock::When);
    impl UploadArtifactWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::PUT)
                    .path_matches(regex::Regex::new("^/[^/?#]+/artifacts/[^/?#]+$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn object_id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}/artifacts/[^/?#]+$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn artifact_id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/[^/?#]+/artifacts/{}$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
        pub fn body(self, value: &[u8]) -> Self {
            Self(self.0.body(String::from_utf8_lossy(value)))
        }
    }
    pub struct UploadArtifactThen(httpmock::Then);
    impl UploadArtifactThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self) -> Self {
            Self(self.0.status(200u16))
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
    pub struct DeleteArtifactWhen(httpmock::When);
    impl DeleteArtifactWhen {
        pub fn new(inner: httpmock::When) -> Self {
            Self(
                inner
                    .method(httpmock::Method::DELETE)
                    .path_matches(regex::Regex::new("^/[^/?#]+/artifacts/[^/?#]+$").unwrap()),
            )
        }
        pub fn into_inner(self) -> httpmock::When {
            self.0
        }
        pub fn object_id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/{}/artifacts/[^/?#]+$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn artifact_id(self, value: &str) -> Self {
            let re = regex::Regex::new(
                    &format!("^/[^/?#]+/artifacts/{}$", regex::escape(&progenitor_client::encode_path(value))),
                )
                .unwrap();
            Self(self.0.path_matches(re))
        }
        pub fn account<'a, T>(self, value: T) -> Self
        where
            T: Into<Option<&'a str>>,
        {
            if let Some(value) = value.into() {
                Self(self.0.query_param("account", value.to_string()))
            } else {
                Self(
                    self
                        .0
                        .matches(|req| {
                            Some(req.query_params())
                                .as_ref()
                                .and_then(|qs| { qs.iter().find(|(key, _)| key == "account") })
                                .is_none()
                        }),
                )
            }
        }
    }
    pub struct DeleteArtifactThen(httpmock::Then);
    impl DeleteArtifactThen {
        pub fn new(inner: httpmock::Then) -> Self {
            Self(inner)
        }
        pub fn into_inner(self) -> httpmock::Then {
            self.0
        }
        pub fn ok(self) -> Self {
            Self(self.0.status(200u16))
        }
        pub fn unauthorized(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(401u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn forbidden(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(403u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
        pub fn not_found(self, value: &types::ErrorResponse) -> Self {
            Self(
                self
                    .0
                    .status(404u16)
                    .header("content-type", "application/json")
                    .json_body_obj(value),
            )
        }
    }
}
/// An extension trait for [`MockServer`](httpmock::MockServer) that
/// adds a method for each operation. These are the equivalent of
/// type-checked [`mock()`](httpmock::MockServer::mock) calls.
pub trait MockServerExt {
    fn list_catalog_entries<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::ListCatalogEntriesWhen, operations::ListCatalogEntriesThen);
    fn create_catalog_entry<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::CreateCatalogEntryWhen, operations::CreateCatalogEntryThen);
    fn get_catalog_entry<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetCatalogEntryWhen, operations::GetCatalogEntryThen);
    fn update_catalog_entry<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::UpdateCatalogEntryWhen, operations::UpdateCatalogEntryThen);
    fn delete_catalog_entry<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::DeleteCatalogEntryWhen, operations::DeleteCatalogEntryThen);
    fn get_child_objects<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetChildObjectsWhen, operations::GetChildObjectsThen);
    fn restore_catalog_entry<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::RestoreCatalogEntryWhen, operations::RestoreCatalogEntryThen);
    fn get_visibility<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetVisibilityWhen, operations::GetVisibilityThen);
    fn update_visibility<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::UpdateVisibilityWhen, operations::UpdateVisibilityThen);
    fn get_pricing<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetPricingWhen, operations::GetPricingThen);
    fn get_pricing_deployments<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetPricingDeploymentsWhen, operations::GetPricingDeploymentsThen);
    fn get_audit_logs<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetAuditLogsWhen, operations::GetAuditLogsThen);
    fn list_artifacts<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::ListArtifactsWhen, operations::ListArtifactsThen);
    fn get_artifact<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetArtifactWhen, operations::GetArtifactThen);
    fn upload_artifact<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::UploadArtifactWhen, operations::UploadArtifactThen);
    fn delete_artifact<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::DeleteArtifactWhen, operations::DeleteArtifactThen);
}
impl MockServerExt for httpmock::MockServer {
    fn list_catalog_entries<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::ListCatalogEntriesWhen, operations::ListCatalogEntriesThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::ListCatalogEntriesWhen::new(when),
                operations::ListCatalogEntriesThen::new(then),
            )
        })
    }
    fn create_catalog_entry<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::CreateCatalogEntryWhen, operations::CreateCatalogEntryThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::CreateCatalogEntryWhen::new(when),
                operations::CreateCatalogEntryThen::new(then),
            )
        })
    }
    fn get_catalog_entry<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetCatalogEntryWhen, operations::GetCatalogEntryThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::GetCatalogEntryWhen::new(when),
                operations::GetCatalogEntryThen::new(then),
            )
        })
    }
    fn update_catalog_entry<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::UpdateCatalogEntryWhen, operations::UpdateCatalogEntryThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::UpdateCatalogEntryWhen::new(when),
                operations::UpdateCatalogEntryThen::new(then),
            )
        })
    }
    fn delete_catalog_entry<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::DeleteCatalogEntryWhen, operations::DeleteCatalogEntryThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::DeleteCatalogEntryWhen::new(when),
                operations::DeleteCatalogEntryThen::new(then),
            )
        })
    }
    fn get_child_objects<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetChildObjectsWhen, operations::GetChildObjectsThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::GetChildObjectsWhen::new(when),
                operations::GetChildObjectsThen::new(then),
            )
        })
    }
    fn restore_catalog_entry<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::RestoreCatalogEntryWhen, operations::RestoreCatalogEntryThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::RestoreCatalogEntryWhen::new(when),
                operations::RestoreCatalogEntryThen::new(then),
            )
        })
    }
    fn get_visibility<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetVisibilityWhen, operations::GetVisibilityThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::GetVisibilityWhen::new(when),
                operations::GetVisibilityThen::new(then),
            )
        })
    }
    fn update_visibility<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::UpdateVisibilityWhen, operations::UpdateVisibilityThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::UpdateVisibilityWhen::new(when),
                operations::UpdateVisibilityThen::new(then),
            )
        })
    }
    fn get_pricing<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetPricingWhen, operations::GetPricingThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::GetPricingWhen::new(when),
                operations::GetPricingThen::new(then),
            )
        })
    }
    fn get_pricing_deployments<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetPricingDeploymentsWhen, operations::GetPricingDeploymentsThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::GetPricingDeploymentsWhen::new(when),
                operations::GetPricingDeploymentsThen::new(then),
            )
        })
    }
    fn get_audit_logs<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetAuditLogsWhen, operations::GetAuditLogsThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::GetAuditLogsWhen::new(when),
                operations::GetAuditLogsThen::new(then),
            )
        })
    }
    fn list_artifacts<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::ListArtifactsWhen, operations::ListArtifactsThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::ListArtifactsWhen::new(when),
                operations::ListArtifactsThen::new(then),
            )
        })
    }
    fn get_artifact<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::GetArtifactWhen, operations::GetArtifactThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::GetArtifactWhen::new(when),
                operations::GetArtifactThen::new(then),
            )
        })
    }
    fn upload_artifact<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::UploadArtifactWhen, operations::UploadArtifactThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::UploadArtifactWhen::new(when),
                operations::UploadArtifactThen::new(then),
            )
        })
    }
    fn delete_artifact<F>(&self, config_fn: F) -> httpmock::Mock
    where
        F: FnOnce(operations::DeleteArtifactWhen, operations::DeleteArtifactThen),
    {
        self.mock(|when, then| {
            config_fn(
                operations::DeleteArtifactWhen::new(when),
                operations::DeleteArtifactThen::new(then),
            )
        })
    }
}
