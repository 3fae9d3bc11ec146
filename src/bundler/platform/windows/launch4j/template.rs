//! Launch4j configuration template.

/// Launch4j XML configuration rendered by handlebars.
///
/// Every interpolated value is XML-escaped by the renderer.
pub const LAUNCH4J_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<launch4jConfig>
    <dontWrapJar>{{dont_wrap_jar}}</dontWrapJar>
    <headerType>{{header_type}}</headerType>
    <jar>{{jar}}</jar>
    <outfile>{{outfile}}</outfile>
    <errTitle>{{err_title}}</errTitle>
    <cmdLine>{{cmd_line}}</cmdLine>
    <chdir>{{chdir}}</chdir>
    <priority>{{priority}}</priority>
    <downloadUrl>{{download_url}}</downloadUrl>
    <supportUrl>{{support_url}}</supportUrl>
    <stayAlive>{{stay_alive}}</stayAlive>
    <manifest></manifest>
    <icon>{{icon}}</icon>
    <log>{{log}}</log>
    <jre>
        <path>{{jre_path}}</path>
        <bundledJre64Bit>{{bundled_jre_64bit}}</bundledJre64Bit>
        <minVersion>{{min_version}}</minVersion>
        <maxVersion>{{max_version}}</maxVersion>
        <jdkPreference>{{jdk_preference}}</jdkPreference>
        <runtimeBits>{{runtime_bits}}</runtimeBits>
    </jre>
</launch4jConfig>
"#;
