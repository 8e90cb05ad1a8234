mod entry;
mod module_rules;
mod optimization;
mod output;
mod plugins;
mod resolve;
mod stats;
