/// Builds links to the file endpoints. Transfers themselves happen outside this client.
#[derive(Debug, Clone)]
pub struct FileRepository {
    base: String,
}

impl FileRepository {
    pub fn new(api_url: &str) -> Self {
        Self {
            base: format!("{}/file", api_url.trim_end_matches('/')),
        }
    }

    pub fn download_link(&self, key: &str) -> String {
        format!("{}/download/{}", self.base, key)
    }

    pub fn upload_link(&self) -> String {
        format!("{}/upload", self.base)
    }
}
