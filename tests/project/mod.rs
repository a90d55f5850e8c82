mod tests_analyzer;
