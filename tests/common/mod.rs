//! Shared fixtures and helpers for the integration tests.

#![allow(dead_code)]

use plumbline::{check_source, AlignmentCategory, CategorySet, CheckConfig};

/// A class whose declaration groups are all column-aligned.
pub const PROPERLY_ALIGNED: &str = concat!(
    "public class Main {\n",
    "\n",
    "     int    field1 = 7;\n",
    "     double field2 = 7.0;\n",
    "\n",
    "     public static void meth1(\n",
    "         String[] param1,\n",
    "         int      param2\n",
    "     ) {\n",
    "\n",
    "         int    locvar1 = 7;\n",
    "         double locvar2 = 7.0;\n",
    "\n",
    "         y   = 8;\n",
    "         yyy = 8.0;\n",
    "\n",
    "         switch (x) {\n",
    "         case 1:  break;\n",
    "         default: x++; return;\n",
    "         }\n",
    "     }\n",
    "\n",
    "     public static void meth1() {}\n",
    "     public void        meth2() {}\n",
    " }\n",
);

/// The same class with one deviator per category.
pub const MISALIGNED: &str = concat!(
    "public class Main {\n",
    "\n",
    "     int field1    = 7;\n",
    "     double field2 = 7.0;\n",
    "\n",
    "     int    field3 = 7;\n",
    "     double field4  = 7.0;\n",
    "\n",
    "     public static void meth1(\n",
    "         String[] param1,\n",
    "         int param2\n",
    "     ) {\n",
    "\n",
    "         int locvar1    = 7;\n",
    "         double locvar2 = 7.0;\n",
    "\n",
    "         int    locvar1 = 7;\n",
    "         double locvar2  = 7.0;\n",
    "\n",
    "         y = 8;\n",
    "         yyy = 8.0;\n",
    "\n",
    "         switch (x) {\n",
    "         case 1: break;\n",
    "         default: x++; return;\n",
    "         }\n",
    "     }\n",
    "\n",
    "     public static void meth1() {}\n",
    "     public void meth2()        {}\n",
    "\n",
    "     public static void meth3() {}\n",
    "     public void        meth4()  {}\n",
    " }\n",
);

/// Run a check and render its violations.
pub fn check_with(config: &CheckConfig, source: &str) -> Vec<String> {
    check_source(source, config)
        .unwrap()
        .into_iter()
        .map(|v| v.to_string())
        .collect()
}

/// Run exactly one alignment category, everything else off.
pub fn check_category_only(category: AlignmentCategory, source: &str) -> Vec<String> {
    let config = CheckConfig::alignment_only(CategorySet::of(&[category]));
    check_with(&config, source)
}
