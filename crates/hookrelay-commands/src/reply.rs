//! [`ReplyChannel`] backed by a live Discord interaction.

use crate::framework::{Data, Error};
use crate::relay::ReplyChannel;
use async_trait::async_trait;
use hookrelay_common::Visibility;
use poise::serenity_prelude as serenity;

/// Replies to the slash-command interaction behind a Poise application context.
pub struct InteractionReply<'a> {
    ctx: poise::ApplicationContext<'a, Data, Error>,
}

impl<'a> InteractionReply<'a> {
    /// Wraps the context of the invocation being handled.
    pub const fn new(ctx: poise::ApplicationContext<'a, Data, Error>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ReplyChannel for InteractionReply<'_> {
    async fn acknowledge(&self, visibility: Visibility) -> Result<(), Error> {
        let ctx = poise::Context::Application(self.ctx);
        if visibility.is_ephemeral() {
            ctx.defer_ephemeral().await?;
        } else {
            ctx.defer().await?;
        }
        Ok(())
    }

    async fn complete(&self, content: &str) -> Result<(), Error> {
        self.ctx
            .interaction
            .edit_response(
                self.ctx.serenity_context,
                serenity::EditInteractionResponse::new().content(content),
            )
            .await?;
        Ok(())
    }
}
