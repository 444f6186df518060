use crate::config::{AdminConfig, ApiConfig, BASE_URL_ENV, DEVELOPMENT_BASE_URL};
use crate::core::ImageFile;
use crate::services::AdminApi;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ceremic-admin")]
#[command(about = "Admin client for the ceremic product, order, FAQ and blog API")]
pub struct CliConfig {
    #[arg(long, global = true, help = "API base URL, overrides everything else")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Use the local development API host")]
    pub local: bool,

    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Products, lookup lists, images and SEO records
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Orders (read-only)
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Frequently asked questions
    Faqs {
        #[command(subcommand)]
        action: FaqAction,
    },
    /// Blog posts
    Blogs {
        #[command(subcommand)]
        action: BlogAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ProductAction {
    Create {
        #[arg(long, help = "JSON payload or @path/to/file.json")]
        data: String,
    },
    Benefits,
    LovePoints,
    Details,
    Discounts,
    List,
    Upload {
        #[arg(long)]
        ceremic_id: String,
        #[arg(long)]
        file: PathBuf,
        #[arg(long, help = "Mark the image as a catalog image")]
        catalog: bool,
    },
    SeoCreate {
        #[arg(long)]
        data: String,
    },
    SeoUpdate {
        seo_id: String,
        #[arg(long)]
        data: String,
    },
    SeoGet {
        product_id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum OrderAction {
    List,
    Get { order_id: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum FaqAction {
    List,
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        faq_id: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        faq_id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum BlogAction {
    List,
    Get {
        blog_id: String,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        blog_id: String,
        #[arg(long)]
        data: String,
    },
}

impl CliConfig {
    /// 依序取第一個非空值：--base-url、--local、環境變數、設定檔
    pub fn api_config(&self, file_config: &AdminConfig) -> ApiConfig {
        let env_value = std::env::var(BASE_URL_ENV).ok();
        let local = self.local.then_some(DEVELOPMENT_BASE_URL);
        ApiConfig::resolve(first_non_empty(&[
            self.base_url.as_deref(),
            local,
            env_value.as_deref(),
            file_config.base_url(),
        ]))
    }

    pub fn load_file_config(&self) -> Result<AdminConfig> {
        match &self.config {
            Some(path) => AdminConfig::from_file(path),
            None => Ok(AdminConfig::default()),
        }
    }
}

fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.is_empty())
}

/// `--data` 參數：直接 JSON 或 `@檔案路徑`
pub fn load_payload(data: &str) -> Result<Value> {
    let content = match data.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)?,
        None => data.to_string(),
    };
    Ok(serde_json::from_str(&content)?)
}

pub async fn execute(api: &AdminApi, command: &Command) -> Result<Value> {
    let value = match command {
        Command::Products { action } => execute_product(api, action).await?,
        Command::Orders { action } => match action {
            OrderAction::List => api.orders.get_orders().await?,
            OrderAction::Get { order_id } => api.orders.get_order_by_id(order_id).await?,
        },
        Command::Faqs { action } => match action {
            FaqAction::List => api.faqs.get_faqs().await?,
            FaqAction::Create { data } => api.faqs.create_faq(&load_payload(data)?).await?,
            FaqAction::Update { faq_id, data } => {
                api.faqs.update_faq(faq_id, &load_payload(data)?).await?
            }
            FaqAction::Delete { faq_id } => api.faqs.delete_faq(faq_id).await?,
        },
        Command::Blogs { action } => match action {
            BlogAction::List => api.blogs.get_blogs().await?,
            BlogAction::Get { blog_id } => api.blogs.get_blog_by_id(blog_id).await?,
            BlogAction::Create { data } => api.blogs.create_blog(&load_payload(data)?).await?,
            BlogAction::Update { blog_id, data } => {
                api.blogs.update_blog(blog_id, &load_payload(data)?).await?
            }
        },
    };
    Ok(value)
}

async fn execute_product(api: &AdminApi, action: &ProductAction) -> Result<Value> {
    let products = &api.products;
    let value = match action {
        ProductAction::Create { data } => products.create_product(&load_payload(data)?).await?,
        ProductAction::Benefits => products.get_benefits().await?,
        ProductAction::LovePoints => products.get_love_points().await?,
        ProductAction::Details => products.get_product_details().await?,
        ProductAction::Discounts => products.get_discounts().await?,
        ProductAction::List => products.get_products().await?,
        ProductAction::Upload {
            ceremic_id,
            file,
            catalog,
        } => {
            let image = ImageFile::from_path(file).await?;
            products
                .upload_image(ceremic_id, image, Some(*catalog))
                .await?
        }
        ProductAction::SeoCreate { data } => {
            products.create_product_seo(&load_payload(data)?).await?
        }
        ProductAction::SeoUpdate { seo_id, data } => {
            products
                .update_product_seo(seo_id, &load_payload(data)?)
                .await?
        }
        ProductAction::SeoGet { product_id } => {
            products.get_product_seo_by_product_id(product_id).await?
        }
    };
    Ok(value)
}
