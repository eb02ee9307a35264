use crate::github::{Release, RepositoryId};
use serde::Serialize;

const AVATAR_ALT_TEXT: &str = "Repository Avatar";

/// Block Kit payload accepted by Slack incoming webhooks.
#[derive(Debug, Serialize, PartialEq)]
pub struct Message {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        text: Text,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<Accessory>,
    },
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    Mrkdwn { text: String },
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Accessory {
    Image { image_url: String, alt_text: String },
}

impl Message {
    /// Title block with the owner avatar, followed by the converted notes and
    /// a link to the release page.
    pub fn release(repo: &RepositoryId, release: &Release, avatar_url: &str, notes: &str) -> Self {
        let title = Block::Section {
            text: Text::Mrkdwn {
                text: format!(":rocket: *New {} Release: {}*", repo, release.name),
            },
            accessory: Some(Accessory::Image {
                image_url: avatar_url.to_owned(),
                alt_text: AVATAR_ALT_TEXT.to_owned(),
            }),
        };

        let body = Block::Section {
            text: Text::Mrkdwn {
                text: format!(
                    "*Release Notes:*\n{}\n\n<{}|View Release>",
                    notes, release.html_url
                ),
            },
            accessory: None,
        };

        Message {
            blocks: vec![title, body],
        }
    }
}
