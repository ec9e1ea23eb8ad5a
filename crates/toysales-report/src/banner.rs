//! ASCII-art section headings.
//!
//! Trailing padding is trimmed from every row; backslashes are kept as drawn.

/// "Sales Report", printed above the date line.
pub(crate) const SALES_REPORT_BANNER: &[&str] = &[
    r"  ______             __                            _______                                             __",
    r" /      \           /  |                          /       \                                           /  |",
    r"/$$$$$$  |  ______  $$ |  ______    _______       $$$$$$$  |  ______    ______    ______    ______   _$$ |_",
    r"$$ \__$$/  /      \ $$ | /      \  /       |      $$ |__$$ | /      \  /      \  /      \  /      \ / $$   |",
    r"$$      \  $$$$$$  |$$ |/$$$$$$  |/$$$$$$$/       $$    $$< /$$$$$$  |/$$$$$$  |/$$$$$$  |/$$$$$$  |$$$$$$/",
    r" $$$$$$  | /    $$ |$$ |$$    $$ |$$      \       $$$$$$$  |$$    $$ |$$ |  $$ |$$ |  $$ |$$ |  $$/   $$ | __",
    r"/  \__$$ |/$$$$$$$ |$$ |$$$$$$$$/  $$$$$$  |      $$ |  $$ |$$$$$$$$/ $$ |__$$ |$$ \__$$ |$$ |        $$ |/  |",
    r"$$    $$/ $$    $$ |$$ |$$       |/     $$/       $$ |  $$ |$$       |$$    $$/ $$    $$/ $$ |        $$  $$/",
    r" $$$$$$/   $$$$$$$/ $$/  $$$$$$$/ $$$$$$$/        $$/   $$/  $$$$$$$/ $$$$$$$/   $$$$$$/  $$/          $$$$/",
    r"                                                                      $$ |",
    r"                                                                      $$ |",
    r"                                                                      $$/",
];

/// "Products", printed above the per-product section.
pub(crate) const PRODUCTS_BANNER: &[&str] = &[
    r"                     _            _",
    r"                    | |          | |",
    r" _ __  _ __ ___   __| |_   _  ___| |_ ___",
    r"| '_ \| '__/ _ \ / _` | | | |/ __| __/ __|",
    r"| |_) | | | (_) | (_| | |_| | (__| |_\__ \",
    r"| .__/|_|  \___/ \__,_|\__,_|\___|\__|___/",
    r"| |",
    r"|_|",
];

/// "Brands", printed above the per-brand section.
pub(crate) const BRANDS_BANNER: &[&str] = &[
    r" _                         _",
    r"| |                       | |",
    r"| |__  _ __ __ _ _ __   __| |___",
    r"| '_ \| '__/ _` | '_ \ / _` / __|",
    r"| |_) | | | (_| | | | | (_| \__ \",
    r"|_.__/|_|  \__,_|_| |_|\__,_|___/",
];
