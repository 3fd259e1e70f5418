mod user_filter;
