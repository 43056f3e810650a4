use clap::Parser;
use indexs3client_storage::S3Options;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct IndexArgs {
    /// URL of the object to index, `s3://<bucket>/<guid>/<filename>`.
    #[arg(long, env = "INPUT_URL", default_value = "")]
    pub input_url: String,

    /// JSON document with the Indexd and metadata service credentials.
    #[arg(
        long,
        env = "CONFIG_FILE",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub config: String,

    /// Endpoint of an S3-compatible store, when not using AWS.
    #[arg(long, env = "S3_ENDPOINT_URL")]
    pub s3_endpoint_url: Option<String>,

    #[arg(long, env = "AWS_REGION")]
    pub s3_region: Option<String>,
}

impl IndexArgs {
    #[must_use]
    pub fn s3_options(&self) -> S3Options {
        S3Options {
            endpoint_url: self.s3_endpoint_url.clone(),
            region: self.s3_region.clone(),
        }
    }
}
