//! Static reply texts.
//!
//! `/start` and `/help` are trusted constants sent with Markdown markup; keep
//! them free of `_` and `*` outside intended formatting, and keep `[` inside
//! backticks so it is not read as a link.

pub const START_TEXT: &str = "Welcome to the DNS Resolver Bot! 🌐\n\n\
I can help you resolve domain names using various DNS resolvers. \
Use the commands below to get started:\n\
\nCommands:\n\
/resolver - List available resolvers\n\
`/lookup [resolver] domain` - Lookup a domain using a specific resolver\n\
`/lookup ip` - Find the hostnames of an IP address\n\
\nExample:\n\
`/lookup Google example.com`\n\
\nNeed help? Use /help.";

pub const HELP_TEXT: &str = "Here's how to use this bot:\n\n\
1️⃣ Use /resolver to see the available DNS resolvers.\n\
2️⃣ Use `/lookup [resolver] domain` to resolve a domain using the specified resolver. \
If no resolver is specified, the default resolver is used.\n\
3️⃣ Use /lookup with an IP address to get its hostnames (reverse lookup).\n\
4️⃣ In any chat, mention the bot followed by `[resolver] domain`, \
or by `lookup ip`, to share a result inline.\n\
\nExamples:\n\
`/lookup Google example.com`\n\
`/lookup example.com` (uses the default resolver)\n\
`/lookup 8.8.8.8` (reverse lookup)\n\
\n🔧 Available Commands:\n\
/start - Show welcome message\n\
/help - Display this help message\n\
/resolver - List available resolvers\n\
/lookup - Resolve a domain or an IP address\n\n\
Happy resolving! 🚀";

pub const USAGE_TEXT: &str =
    "Usage: /lookup [resolver] domain\nExample: /lookup Google example.com";

pub const INLINE_USAGE_DESCRIPTION: &str = "Type [resolver] domain, or lookup followed by an IP";

pub const INVALID_FORMAT_TEXT: &str = "Error: Invalid domain format. \
Please use a valid domain like example.com or an IP address like 8.8.8.8.";

pub const INLINE_INVALID_FORMAT_DESCRIPTION: &str = "Provide a valid domain like example.com";
pub const INLINE_INVALID_FORMAT_TEXT: &str = "Error: Invalid domain format.";

pub const UNKNOWN_RESOLVER_TEXT: &str =
    "Error: Unknown resolver. Use /resolver to see the available resolvers.";
pub const INLINE_UNKNOWN_RESOLVER_TEXT: &str =
    "Error: Unknown resolver. Use a valid resolver name.";

pub const UNKNOWN_COMMAND_TEXT: &str = "Unknown command. Use /help to see what I can do.";
