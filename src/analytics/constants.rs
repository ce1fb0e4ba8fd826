use crate::util::Template;

pub const DEFAULT_UMAMI_SERVER_URL: &str = "https://cloud.umami.is";
pub const UMAMI_WEBSITE_ID_ATTRIBUTE: &str = "data-website-id";

pub const GTAG_SCRIPT_URL: Template =
    Template::new("https://www.googletagmanager.com/gtag/js?id={$measurementId}");

pub const GTAG_BOOTSTRAP: Template = Template::new(
    r#"window.dataLayer = window.dataLayer || [];
function gtag(){dataLayer.push(arguments);}
gtag('js', new Date());

gtag('config', '{$measurementId}');"#,
);

pub const CLARITY_BOOTSTRAP: Template = Template::new(
    r#"(function(c,l,a,r,i,t,y){
  c[a]=c[a]||function(){(c[a].q=c[a].q||[]).push(arguments)};
  t=l.createElement(r);t.async=1;t.src="https://www.clarity.ms/tag/"+i;
  y=l.getElementsByTagName(r)[0];y.parentNode.insertBefore(t,y);
})(window, document, "clarity", "script", "{$projectId}");"#,
);

pub const BAIDU_BOOTSTRAP: Template = Template::new(
    r#"
var _hmt = _hmt || [];
(function() {
  var hm = document.createElement("script");
  hm.src = "https://hm.baidu.com/hm.js?{$projectId}";
  var s = document.getElementsByTagName("script")[0];
  s.parentNode.insertBefore(hm, s);
})();
"#,
);
