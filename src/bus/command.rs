//! Command types: intents carried to exactly one handler.

use crate::schema::ValidationError;

/// Intent to analyze one or two scoreboard screenshots.
///
/// Imperatively named and immutable once built; the constructor is the
/// only door and it validates. The first image is the end-of-game
/// scoreboard, the optional second one the weapon stats page.
#[derive(Clone, Debug)]
pub struct AnalyzeImages {
    pub image_one: Vec<u8>,
    pub image_two: Option<Vec<u8>>,
    pub user_id: u64,
    pub message_id: u64,
    pub channel_id: u64,
}

impl AnalyzeImages {
    pub fn new(
        image_one: Vec<u8>,
        image_two: Option<Vec<u8>>,
        user_id: u64,
        message_id: u64,
        channel_id: u64,
    ) -> Result<Self, ValidationError> {
        if image_one.is_empty() {
            return Err(ValidationError::new("image_one", "must not be empty"));
        }
        if let Some(second) = &image_two {
            if second.is_empty() {
                return Err(ValidationError::new("image_two", "must not be empty"));
            }
        }
        check_ids(user_id, message_id, channel_id)?;
        Ok(Self {
            image_one,
            image_two,
            user_id,
            message_id,
            channel_id,
        })
    }
}

/// Intent to answer a natural-language question about match history.
#[derive(Clone, Debug)]
pub struct QueryMatches {
    pub query: String,
    pub user_id: u64,
    pub message_id: u64,
    pub channel_id: u64,
}

impl QueryMatches {
    pub fn new(
        query: impl Into<String>,
        user_id: u64,
        message_id: u64,
        channel_id: u64,
    ) -> Result<Self, ValidationError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(ValidationError::new("query", "must not be empty"));
        }
        check_ids(user_id, message_id, channel_id)?;
        Ok(Self {
            query,
            user_id,
            message_id,
            channel_id,
        })
    }
}

fn check_ids(user_id: u64, message_id: u64, channel_id: u64) -> Result<(), ValidationError> {
    if user_id == 0 {
        return Err(ValidationError::new("user_id", "must be a positive id"));
    }
    if message_id == 0 {
        return Err(ValidationError::new("message_id", "must be a positive id"));
    }
    if channel_id == 0 {
        return Err(ValidationError::new("channel_id", "must be a positive id"));
    }
    Ok(())
}

/// Discriminant used to route commands to their single handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    AnalyzeImages,
    QueryMatches,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::AnalyzeImages => "AnalyzeImages",
            CommandKind::QueryMatches => "QueryMatches",
        }
    }
}

/// Any command the bus can execute.
#[derive(Clone, Debug)]
pub enum Command {
    AnalyzeImages(AnalyzeImages),
    QueryMatches(QueryMatches),
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::AnalyzeImages(_) => CommandKind::AnalyzeImages,
            Command::QueryMatches(_) => CommandKind::QueryMatches,
        }
    }
}

impl From<AnalyzeImages> for Command {
    fn from(cmd: AnalyzeImages) -> Self {
        Command::AnalyzeImages(cmd)
    }
}

impl From<QueryMatches> for Command {
    fn from(cmd: QueryMatches) -> Self {
        Command::QueryMatches(cmd)
    }
}
