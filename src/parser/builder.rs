use crate::compat::{Cow, String, ToString};
use crate::components::UriComponents;
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;

/// Mutable accumulator owned by a single parse call.
/// Consumed by [`UriBuilder::build`]; never shared between calls.
#[derive(Debug, Default)]
pub struct UriBuilder {
    scheme_type: SchemeType,
    components: UriComponents,
}

impl UriBuilder {
    /// Record the scanned scheme. Only the scheme scanner calls this.
    pub fn set_scheme(&mut self, scheme: String) {
        self.scheme_type = get_scheme_type(&scheme);
        self.components.scheme = scheme;
    }

    pub fn scheme_type(&self) -> SchemeType {
        self.scheme_type
    }

    /// Overwrites any userinfo recorded by an earlier `@`.
    pub fn set_userinfo(&mut self, username: Cow<'_, str>, password: Cow<'_, str>) {
        self.components.username = username.into_owned();
        self.components.password = password.into_owned();
    }

    pub fn set_host_port(&mut self, host: String, port: String) {
        self.components.host = host;
        self.components.port = port;
    }

    pub fn set_path(&mut self, path: String) {
        self.components.path = path;
    }

    pub fn set_query(&mut self, query: &str) {
        self.components.query = query.to_string();
    }

    pub fn set_fragment(&mut self, fragment: &str) {
        self.components.fragment = fragment.to_string();
    }

    pub fn set_opaque(&mut self, opaque: &str) {
        self.components.opaque = opaque.to_string();
    }

    /// Components under construction, for the final normalization pass
    pub(crate) fn components_mut(&mut self) -> &mut UriComponents {
        &mut self.components
    }

    pub fn build(self) -> UriComponents {
        self.components
    }
}
