//! Command lookup on an agent's output link.

use tracing::trace;

use crate::wm::{CommandSource, Element};

pub trait CommandSourceExt: CommandSource {
    /// First command whose name is `name`, viewed as its identifier.
    ///
    /// Linear scan; later commands with the same name are never returned.
    fn find_command(&self, name: &str) -> Option<&<Self::Element as Element>::Identifier> {
        let found = (0..self.number_of_commands())
            .filter_map(|index| self.command_at(index))
            .find(|command| self.command_name(command) == name)?;
        trace!(command = name, "command found");
        found.as_identifier()
    }
}

impl<S: CommandSource> CommandSourceExt for S {}
