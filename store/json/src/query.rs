mod config;
mod project;
