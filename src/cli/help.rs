pub const TOP_LONG_ABOUT: &str = "setman keeps a single JSON settings file and lets you set, read, and list named options in it. Three keys are well-known (result_dir, input_dirs, name); any other key works too.";

pub const TOP_AFTER_HELP: &str = "EXAMPLES:\n  setman init ./input/dir1 ./input/dir2\n  setman set result_dir ./output/results\n  setman set retries --json 3\n  setman get result_dir\n  setman show\n  setman --file ./elsewhere/settings.json show\n\nKNOWN KEYS:\n  result_dir   output directory (string)\n  input_dirs   input directories (array of strings)\n  name         free-form label (string)\n\nSETTINGS FILE:\n  Defaults to ./files/settings.json; change it per call with --file or\n  permanently via settings_file in config.toml.";

pub const INIT_LONG_ABOUT: &str = "Record the given directories under the input_dirs key, replacing any previous list.\n\nPaths are stored in their string form with '.' components dropped\n(./input/dir1 is recorded as input/dir1). Directories that do not exist\nare still recorded; a warning points them out.";

pub const INIT_AFTER_HELP: &str = "EXAMPLES:\n  setman init ./input/dir1 ./input/dir2\n  setman init ~/data/batch-a ~/data/batch-b";

pub const SET_AFTER_HELP: &str = "VALUES:\n  By default VALUE is stored as a JSON string. Pass --json to store a\n  JSON literal instead (array, number, boolean, null).\n\nEXAMPLES:\n  setman set result_dir ./output/results\n  setman set name student1\n  setman set input_dirs --json '[\"input/dir1\", \"input/dir2\"]'\n  setman set retries --json 3";

pub const GET_AFTER_HELP: &str = "OUTPUT:\n  String values print bare; anything else prints as compact JSON.\n  An unset key prints a warning and exits successfully.\n\nEXAMPLE:\n  setman get result_dir";

pub const SHOW_AFTER_HELP: &str = "Lists every key in the settings file as a KEY/TYPE/VALUE table, with the\nfile path and its last modification time above it.";
