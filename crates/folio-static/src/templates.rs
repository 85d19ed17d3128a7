//! Template engine for rendering portfolio pages.

use minijinja::Environment;
use serde::Serialize;

/// Template engine using minijinja.
///
/// All templates are embedded; names ending in `.html` are auto-escaped.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("href", href);

        for (name, source) in TEMPLATES {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("Failed to add built-in template");
        }

        Self { env }
    }

    /// Render a template with a serializable context.
    pub fn render<S: Serialize>(&self, template: &str, ctx: S) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;
        tmpl.render(ctx)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Mount a site path under the base URL; absolute URLs pass through.
fn href(url: &str, base_url: &str) -> String {
    if url.starts_with("https://") || url.starts_with("http://") {
        url.to_string()
    } else {
        format!("{}{}", base_url, url.trim_start_matches('/'))
    }
}

const TEMPLATES: [(&str, &str); 9] = [
    ("base.html", BASE_TEMPLATE),
    ("nav.html", NAV_TEMPLATE),
    ("macros.html", MACROS_TEMPLATE),
    ("home.html", HOME_TEMPLATE),
    ("projects.html", PROJECTS_TEMPLATE),
    ("project.html", PROJECT_TEMPLATE),
    ("demos.html", DEMOS_TEMPLATE),
    ("not_found.html", NOT_FOUND_TEMPLATE),
    ("sitemap.xml", SITEMAP_TEMPLATE),
];

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{% if title %}{{ title }} | {% endif %}{{ site_name }}</title>
  {% if description %}<meta name="description" content="{{ description }}">
  {% endif %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  {% include "nav.html" %}
  <main class="main">
    {% block content %}{% endblock %}
  </main>
  <footer class="footer">&copy; {{ year }} {{ site_name }}</footer>
</body>
</html>
"##;

const NAV_TEMPLATE: &str = r##"<header class="site-header">
  <div class="site-header-inner">
    <a href="{{ base_url }}" class="site-name">{{ site_name }}</a>
    <nav class="site-nav">
    {%- for link in nav %}
      <a href="{{ link.href }}" class="nav-link"
        {%- if link.kind == "download" %} download
        {%- elif link.kind == "external" %} target="_blank" rel="noopener noreferrer"
        {%- endif %}>{{ link.label }}</a>
    {%- endfor %}
    </nav>
  </div>
</header>"##;

const MACROS_TEMPLATE: &str = r##"{% macro skill_badges(skills) -%}
{% if skills %}<ul class="skills">
  {%- for skill in skills %}<li class="skill">{{ skill }}</li>{% endfor -%}
</ul>{% endif %}
{%- endmacro %}

{% macro project_card(project, base_url) -%}
<article class="project-card" id="project-{{ project.slug }}">
  <h3 class="project-title"><a href="{{ base_url }}projects/{{ project.slug }}">{{ project.title }}</a></h3>
  {% if project.tagline %}<p class="project-tagline">{{ project.tagline }}</p>
  {% endif %}<p class="project-description">{{ project.description }}</p>
  {{ skill_badges(project.skills) }}
  <div class="project-actions">
    {%- if project.demo_url %}
    <a href="{{ project.demo_url | href(base_url) }}" class="action action-demo" target="_blank" rel="noopener noreferrer">View Demo</a>
    {%- endif %}
    {%- if project.github_url %}
    <a href="{{ project.github_url | href(base_url) }}" class="action action-source" target="_blank" rel="noopener noreferrer">GitHub</a>
    {%- endif %}
  </div>
</article>
{%- endmacro %}
"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% from "macros.html" import project_card, skill_badges %}
<section class="hero">
  <h1>{{ profile.name }}</h1>
  <p class="headline">{{ profile.headline }}</p>
  {% if profile.summary %}<p class="summary">{{ profile.summary }}</p>
  {% endif %}<div class="hero-actions">
    <a href="{{ base_url }}projects" class="button button-primary">View Projects</a>
    <a href="{{ cv_href }}" class="button" download>Download CV</a>
  </div>
</section>

{% if featured %}
<section class="section" id="featured">
  <h2>Featured Projects</h2>
  <div class="project-grid">
  {% for project in featured %}
    {{ project_card(project, base_url) }}
  {% endfor %}
  </div>
</section>
{% endif %}

{% if profile.about_html %}
<section class="section" id="about">
  <h2>About Me</h2>
  <div class="prose">{{ profile.about_html | safe }}</div>
</section>
{% endif %}

{% if profile.education %}
<section class="section" id="education">
  <h2>Education</h2>
  <ul class="education">
  {% for edu in profile.education %}
    <li class="education-item">
      {% if edu.logo_url %}<img src="{{ edu.logo_url | href(base_url) }}" alt="{{ edu.school }} logo" class="education-logo">{% endif %}
      <div>
        <h3>{{ edu.degree }}</h3>
        <p>{{ edu.school }}</p>
        <p class="muted">{{ edu.dates }}</p>
      </div>
    </li>
  {% endfor %}
  </ul>
</section>
{% endif %}

{% if profile.skills %}
<section class="section" id="skills">
  <h2>Technical Skills</h2>
  <div class="skill-groups">
  {% for group in profile.skills %}
    <div class="skill-group">
      <h3>{{ group.category }}</h3>
      {{ skill_badges(group.items) }}
    </div>
  {% endfor %}
  </div>
</section>
{% endif %}

{% if profile.publications %}
<section class="section" id="publications">
  <h2>Publications &amp; Writing</h2>
  <ul class="publications">
  {% for publication in profile.publications %}
    <li><a href="{{ publication.url | href(base_url) }}" target="_blank" rel="noopener noreferrer">{{ publication.title }}</a></li>
  {% endfor %}
  </ul>
</section>
{% endif %}

{% if profile.certifications %}
<section class="section" id="certifications">
  <h2>Certifications</h2>
  {% for cert in profile.certifications %}
  <div class="certification">
    <h3>{{ cert.title }}</h3>
    {% if cert.description %}<p>{{ cert.description }}</p>{% endif %}
    {% if cert.image %}
    <img src="{{ cert.image | href(base_url) }}" alt="{{ cert.title }}" class="certification-image">
    <p class="muted"><a href="{{ cert.image | href(base_url) }}" target="_blank">View full-size</a></p>
    {% endif %}
  </div>
  {% endfor %}
</section>
{% endif %}

{% if has_contact %}
<section class="section contact" id="contact">
  <h2>Get in Touch</h2>
  <ul class="contact-links">
    {% if profile.contact.email %}<li><a href="mailto:{{ profile.contact.email }}">Email</a></li>{% endif %}
    {% if profile.contact.github %}<li><a href="{{ profile.contact.github }}" target="_blank" rel="noopener noreferrer">GitHub</a></li>{% endif %}
    {% if profile.contact.linkedin %}<li><a href="{{ profile.contact.linkedin }}" target="_blank" rel="noopener noreferrer">LinkedIn</a></li>{% endif %}
  </ul>
</section>
{% endif %}
{% endblock %}
"##;

const PROJECTS_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% from "macros.html" import project_card %}
<section class="section">
  <h1>Projects</h1>
  {% if projects %}
  <div class="project-grid">
  {% for project in projects %}
    {{ project_card(project, base_url) }}
  {% endfor %}
  </div>
  {% else %}
  <p class="empty">No projects yet.</p>
  {% endif %}
</section>
{% endblock %}
"##;

const PROJECT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% from "macros.html" import skill_badges %}
<article class="project-detail">
  <a href="{{ base_url }}projects" class="back-link">&larr; Back to Projects</a>
  <h1>{{ project.title }}</h1>
  {% if project.tagline %}<p class="headline">{{ project.tagline }}</p>
  {% endif %}<p class="description">{{ project.description }}</p>

  {% if project.demo_url %}
  <section class="demo">
    <h2>Live Demo</h2>
    <div class="demo-frame">
      <iframe src="{{ project.demo_url | href(base_url) }}" title="{{ project.title }} Demo" loading="lazy"></iframe>
    </div>
    <p class="muted"><a href="{{ project.demo_url | href(base_url) }}" class="action action-demo" target="_blank" rel="noopener noreferrer">View Demo</a></p>
  </section>
  {% endif %}

  {% if project.skills %}
  <section class="technologies">
    <h2>Technologies Used</h2>
    {{ skill_badges(project.skills) }}
  </section>
  {% endif %}

  {% if project.github_url %}
  <a href="{{ project.github_url | href(base_url) }}" class="button action-source" target="_blank" rel="noopener noreferrer">View on GitHub</a>
  {% endif %}
</article>
{% endblock %}
"##;

const DEMOS_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<section class="section">
  <h1>Demos</h1>
  {% for project in demos %}
  <article class="demo" id="demo-{{ project.slug }}">
    <h2><a href="{{ base_url }}projects/{{ project.slug }}">{{ project.title }}</a></h2>
    <div class="demo-frame">
      <iframe src="{{ project.demo_url | href(base_url) }}" title="{{ project.title }} Demo" loading="lazy"></iframe>
    </div>
    <p class="muted"><a href="{{ project.demo_url | href(base_url) }}" class="action action-demo" target="_blank" rel="noopener noreferrer">View Demo</a></p>
  </article>
  {% else %}
  <p class="empty">No live demos yet.</p>
  {% endfor %}
</section>
{% endblock %}
"##;

const NOT_FOUND_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<section class="not-found">
  <h1>{{ message }}</h1>
  <p><a href="{{ back_href }}">{{ back_label }}</a></p>
</section>
{% endblock %}
"##;

const SITEMAP_TEMPLATE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{%- for url in urls %}
  <url>
    <loc>{{ url }}</loc>
  </url>
{%- endfor %}
</urlset>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn loads_all_templates() {
        let engine = TemplateEngine::new();

        for (name, _) in TEMPLATES {
            assert!(engine.env.get_template(name).is_ok(), "missing {}", name);
        }
    }

    #[test]
    fn escapes_html_templates() {
        let engine = TemplateEngine::new();

        let html = engine
            .render(
                "not_found.html",
                context! {
                    site_name => "Site",
                    base_url => "/",
                    year => 2025,
                    nav => Vec::<String>::new(),
                    message => "<script>alert(1)</script>",
                    back_href => "/",
                    back_label => "Home",
                },
            )
            .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn renders_sitemap_urls() {
        let engine = TemplateEngine::new();

        let xml = engine
            .render(
                "sitemap.xml",
                context! { urls => vec!["https://example.com/", "https://example.com/projects"] },
            )
            .unwrap();

        assert!(xml.contains("<urlset"));
        assert_eq!(xml.matches("<loc>").count(), 2);
    }

    #[test]
    fn href_mounts_site_paths_only() {
        assert_eq!(href("/image.webp", "/portfolio/"), "/portfolio/image.webp");
        assert_eq!(href("cv.pdf", "/"), "/cv.pdf");
        assert_eq!(
            href("https://arxiv.org/abs/2507.23364", "/portfolio/"),
            "https://arxiv.org/abs/2507.23364"
        );
    }
}
