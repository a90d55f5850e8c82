mod tests_handlers;
mod tests_registry;
mod tests_resolution;
