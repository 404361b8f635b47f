//! AI assistant commands.

use clap::Subcommand;

use scrum_master_client::ApiClient;
use scrum_master_core::{AiChatRequest, AnalyzeBacklogRequest, BacklogItemType};

use super::{CommandError, print_json};

#[derive(Subcommand)]
pub enum AiAction {
    /// Ask the assistant a question
    Chat {
        message: String,
    },
    /// Assess the clarity and size of a backlog item
    Analyze {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long = "type", default_value = "story")]
        item_type: BacklogItemType,
    },
}

pub async fn run(api: &ApiClient, action: AiAction) -> Result<(), CommandError> {
    match action {
        AiAction::Chat { message } => {
            let request = AiChatRequest {
                message,
                context: None,
            };
            print_json(&api.ai().chat(&request).await?)
        }
        AiAction::Analyze {
            title,
            description,
            item_type,
        } => {
            let request = AnalyzeBacklogRequest {
                title,
                description,
                item_type,
            };
            print_json(&api.ai().analyze_backlog(&request).await?)
        }
    }
}
