//! The PackURI value type, a partname within an OPC package.
//!
//! Partnames always begin with a forward slash and use forward slashes as
//! separators, per the Open Packaging Conventions. A PackURI knows how to
//! derive its directory, filename, extension, numeric index, and the
//! location of its .rels part.

/// An absolute partname within an OPC package, e.g. `/ppt/slides/slide1.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackURI {
    uri: String,
}

impl PackURI {
    /// Create a PackURI from a string, which must begin with a forward slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self, String> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(format!("PackURI must begin with slash, got '{}'", uri));
        }
        Ok(PackURI { uri })
    }

    /// Resolve a relative reference against a base URI into an absolute PackURI.
    ///
    /// Translates a reference like `../slideLayouts/slideLayout1.xml` from a
    /// base of `/ppt/slides` into `/ppt/slideLayouts/slideLayout1.xml`.
    pub fn from_rel_ref(base_uri: &str, relative_ref: &str) -> Result<Self, String> {
        let joined = if base_uri.ends_with('/') {
            format!("{}{}", base_uri, relative_ref)
        } else {
            format!("{}/{}", base_uri, relative_ref)
        };
        Self::new(normalize(&joined))
    }

    /// The directory portion, e.g. `/ppt/slides` for `/ppt/slides/slide1.xml`.
    ///
    /// Returns `/` for the package pseudo-partname and for top-level parts.
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// The filename portion, e.g. `slide1.xml`. Empty for the package
    /// pseudo-partname `/`.
    pub fn filename(&self) -> &str {
        match self.uri.rfind('/') {
            Some(pos) => &self.uri[pos + 1..],
            None => "",
        }
    }

    /// The extension, without the leading period, e.g. `xml`.
    pub fn ext(&self) -> &str {
        match self.filename().rfind('.') {
            Some(pos) => &self.filename()[pos + 1..],
            None => "",
        }
    }

    /// The partname index for tuple partnames, `None` for singletons.
    ///
    /// `/ppt/slides/slide21.xml` has index 21; `/ppt/presentation.xml` has
    /// none.
    pub fn idx(&self) -> Option<u32> {
        let filename = self.filename();
        let stem = match filename.rfind('.') {
            Some(pos) => &filename[..pos],
            None => filename,
        };
        let digits_at = stem.rfind(|c: char| !c.is_ascii_digit()).map(|p| p + 1)?;
        if digits_at == stem.len() {
            return None;
        }
        stem[digits_at..].parse().ok()
    }

    /// The zip membername form, with the leading slash stripped.
    pub fn membername(&self) -> &str {
        if self.uri == "/" { "" } else { &self.uri[1..] }
    }

    /// The relative reference to this partname from `base_uri`.
    ///
    /// PackURI `/ppt/slideLayouts/slideLayout1.xml` seen from
    /// `/ppt/slides` is `../slideLayouts/slideLayout1.xml`.
    pub fn relative_ref(&self, base_uri: &str) -> String {
        if base_uri == "/" {
            return self.membername().to_string();
        }

        let from: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let to: Vec<&str> = self.uri.split('/').filter(|s| !s.is_empty()).collect();
        let common = from
            .iter()
            .zip(to.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut segments: Vec<&str> = Vec::with_capacity(from.len() - common + to.len() - common);
        for _ in common..from.len() {
            segments.push("..");
        }
        segments.extend(&to[common..]);
        segments.join("/")
    }

    /// The partname of the .rels part for this partname, e.g.
    /// `/ppt/_rels/presentation.xml.rels` for `/ppt/presentation.xml`.
    pub fn rels_uri(&self) -> Result<PackURI, String> {
        let base_uri = self.base_uri();
        let rels_uri_str = if base_uri == "/" {
            format!("/_rels/{}.rels", self.filename())
        } else {
            format!("{}/_rels/{}.rels", base_uri, self.filename())
        };
        Self::new(rels_uri_str)
    }

    /// The full partname string.
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

/// Resolve `.` and `..` segments in a slash-separated path.
fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {},
            ".." => {
                parts.pop();
            },
            _ => parts.push(part),
        }
    }
    if parts.is_empty() {
        return "/".to_string();
    }
    let mut out = String::with_capacity(path.len());
    for part in parts {
        out.push('/');
        out.push_str(part);
    }
    out
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

/// The package pseudo-partname, representing the package itself.
pub const PACKAGE_URI: &str = "/";

/// The partname of the [Content_Types].xml part.
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";
